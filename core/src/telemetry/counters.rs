//! telemetry/counters.rs
//! Mutable counters collected while a search runs.
//!
//! Summary: attempts, hits, and chunk accounting merged per completed
//! task. Converted into an immutable SearchSnapshot at the end of a run.

/// Deterministic counters collected during a search.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SearchCounters {
    pub attempts: u64,
    pub hits_found: u64,
    pub tasks_completed: u64,
    pub chunks_failed: u64,
}

impl SearchCounters {
    /// Record one successfully processed chunk.
    pub fn add_chunk(&mut self, attempts: u64, hits: u64) {
        self.tasks_completed += 1;
        self.attempts += attempts;
        self.hits_found += hits;
    }

    /// Record one chunk whose worker failed; it yields zero hits.
    pub fn add_failed_chunk(&mut self) {
        self.tasks_completed += 1;
        self.chunks_failed += 1;
    }

    // Merged in the orchestrator thread only; workers report over the
    // result channel, so no locks or atomics are needed.
    pub fn merge(&mut self, other: &SearchCounters) {
        self.attempts += other.attempts;
        self.hits_found += other.hits_found;
        self.tasks_completed += other.tasks_completed;
        self.chunks_failed += other.chunks_failed;
    }
}
