//! telemetry/snapshot.rs
//! Immutable summary of a finished (or in-flight) search.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::SearchCounters;
use crate::telemetry::timers::TelemetryTimer;

/// Core search snapshot: counters, elapsed duration, and throughput.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSnapshot {
    pub attempts: u64,
    pub hits_found: u64,
    pub tasks_completed: u64,
    pub tasks_total: u64,
    pub chunks_failed: u64,
    pub elapsed: Duration,
    pub attempts_per_sec: f64,
}

impl SearchSnapshot {
    pub fn from(counters: &SearchCounters, timer: &TelemetryTimer, tasks_total: u64) -> Self {
        let elapsed = timer.elapsed();
        let secs = elapsed.as_secs_f64();
        let attempts_per_sec = if secs > 0.0 {
            counters.attempts as f64 / secs
        } else {
            0.0
        };

        Self {
            attempts: counters.attempts,
            hits_found: counters.hits_found,
            tasks_completed: counters.tasks_completed,
            tasks_total,
            chunks_failed: counters.chunks_failed,
            elapsed,
            attempts_per_sec,
        }
    }
}
