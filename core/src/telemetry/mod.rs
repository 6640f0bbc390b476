//! telemetry: counters, wall-clock timing, and run snapshots.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::SearchCounters;
pub use snapshot::SearchSnapshot;
pub use timers::TelemetryTimer;
