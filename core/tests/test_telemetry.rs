#[cfg(test)]
mod tests {
    use std::time::Duration;

    use solver_core::telemetry::{SearchCounters, SearchSnapshot, TelemetryTimer};

    #[test]
    fn counters_accumulate_per_chunk() {
        let mut counters = SearchCounters::default();
        counters.add_chunk(100, 2);
        counters.add_chunk(50, 0);
        counters.add_failed_chunk();

        assert_eq!(counters.attempts, 150);
        assert_eq!(counters.hits_found, 2);
        assert_eq!(counters.tasks_completed, 3);
        assert_eq!(counters.chunks_failed, 1);
    }

    #[test]
    fn counters_merge() {
        let mut a = SearchCounters::default();
        a.add_chunk(10, 1);

        let mut b = SearchCounters::default();
        b.add_chunk(20, 3);
        b.add_failed_chunk();

        a.merge(&b);
        assert_eq!(a.attempts, 30);
        assert_eq!(a.hits_found, 4);
        assert_eq!(a.tasks_completed, 3);
        assert_eq!(a.chunks_failed, 1);
    }

    #[test]
    fn snapshot_captures_counters_and_rate() {
        let mut counters = SearchCounters::default();
        counters.add_chunk(1000, 5);

        let mut timer = TelemetryTimer::new();
        timer.finish();

        let snapshot = SearchSnapshot::from(&counters, &timer, 4);
        assert_eq!(snapshot.attempts, 1000);
        assert_eq!(snapshot.hits_found, 5);
        assert_eq!(snapshot.tasks_total, 4);
        assert_eq!(snapshot.elapsed, timer.elapsed());
        assert!(snapshot.attempts_per_sec >= 0.0);
    }

    #[test]
    fn timer_elapsed_is_monotonic() {
        let mut timer = TelemetryTimer::new();
        let first = timer.elapsed();
        timer.finish();
        let frozen = timer.elapsed();
        assert!(frozen >= first);
        // After finish() the reading no longer advances.
        assert_eq!(timer.elapsed(), frozen);
    }

    #[test]
    fn snapshot_serializes_round_trip() {
        let snapshot = SearchSnapshot {
            attempts: 1234,
            hits_found: 7,
            tasks_completed: 3,
            tasks_total: 3,
            chunks_failed: 0,
            elapsed: Duration::from_millis(250),
            attempts_per_sec: 4936.0,
        };
        let json = serde_json::to_string(&snapshot).expect("serialize");
        let back: SearchSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, snapshot);
    }
}
