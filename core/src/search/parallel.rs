//! search/parallel.rs
//! Chunked sharding of the index range, worker fan-out, hit collection,
//! ranking, and truncation.

use std::cmp::Ordering;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

use crossbeam::channel::bounded;

use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_MAX_HITS, DEFAULT_PROGRESS_EVERY, DEFAULT_WORKERS,
};
use crate::telemetry::{SearchCounters, SearchSnapshot, TelemetryTimer};

use super::worker::{ChunkOutcome, Hit, WorkerContext};
use super::{RunConfig, SearchSpace};

/// How the search is sharded and reported.
#[derive(Clone, Debug)]
pub struct SearchProfile {
    pub workers: usize,
    pub chunk_size: u64,
    pub progress_every: usize,
    pub max_hits: usize,
}

impl SearchProfile {
    pub fn single_threaded() -> Self {
        Self {
            workers: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress_every: DEFAULT_PROGRESS_EVERY,
            max_hits: DEFAULT_MAX_HITS,
        }
    }
}

impl Default for SearchProfile {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress_every: DEFAULT_PROGRESS_EVERY,
            max_hits: DEFAULT_MAX_HITS,
        }
    }
}

/// Result of a finished search: hits sorted descending by score and
/// truncated to `max_hits`, plus the final telemetry snapshot.
#[derive(Debug)]
pub struct SearchReport {
    pub hits: Vec<Hit>,
    pub snapshot: SearchSnapshot,
}

/// What a worker sends back per dispatched chunk.
enum ChunkMessage {
    Done(ChunkOutcome),
    Failed,
}

/// Cover [0, total) with contiguous [lo, hi) chunks of at most
/// `chunk_size` indices. `total = 1` (no axes) yields exactly one chunk.
pub fn build_tasks(total: u64, chunk_size: u64) -> Vec<(u64, u64)> {
    let chunk = chunk_size.max(1);
    let mut tasks = Vec::new();
    let mut lo = 0u64;
    while lo < total {
        let hi = (lo + chunk).min(total);
        tasks.push((lo, hi));
        lo = hi;
    }
    tasks
}

fn print_progress(done: usize, total_tasks: usize, counters: &SearchCounters, timer: &TelemetryTimer) {
    let secs = timer.elapsed().as_secs_f64().max(1e-9);
    println!(
        "[progress] tasks={}/{} attempts={} hits={} rate={:.1}/s",
        done,
        total_tasks,
        counters.attempts,
        counters.hits_found,
        counters.attempts as f64 / secs,
    );
}

/// Run the full search over the parameter space.
///
/// `workers == 1` executes every chunk on the calling thread; otherwise a
/// bounded task queue feeds scoped worker threads, each holding its own
/// `WorkerContext` over the shared immutable run state. Workers may finish
/// out of order; the final descending-by-score sort is stable (ties break
/// on ascending chunk position), so the report is identical for any
/// worker count.
pub fn run_search(config: &RunConfig, space: &SearchSpace, profile: &SearchProfile) -> SearchReport {
    let tasks = build_tasks(space.total, profile.chunk_size);
    let total_tasks = tasks.len();
    let mut timer = TelemetryTimer::new();
    let mut counters = SearchCounters::default();
    let mut all_hits: Vec<Hit> = Vec::new();

    if profile.workers <= 1 {
        let mut ctx = WorkerContext::new(config, space);
        for (i, &(lo, hi)) in tasks.iter().enumerate() {
            let outcome = ctx.process_chunk(lo, hi);
            counters.add_chunk(outcome.attempts, outcome.hits.len() as u64);
            all_hits.extend(outcome.hits);
            if profile.progress_every > 0 && (i + 1) % profile.progress_every == 0 {
                print_progress(i + 1, total_tasks, &counters, &timer);
            }
        }
    } else {
        let (task_tx, task_rx) = bounded::<(u64, u64)>(profile.workers * 2);
        let (out_tx, out_rx) = bounded::<ChunkMessage>(profile.workers * 2);

        thread::scope(|scope| {
            // ---- Feeder ----
            let tasks_ref = &tasks;
            scope.spawn(move || {
                for &(lo, hi) in tasks_ref {
                    if task_tx.send((lo, hi)).is_err() {
                        break;
                    }
                }
                // Sender drops here, closing the task queue.
            });

            // ---- Workers ----
            for _ in 0..profile.workers {
                let rx = task_rx.clone();
                let tx = out_tx.clone();
                scope.spawn(move || {
                    let mut ctx = WorkerContext::new(config, space);
                    while let Ok((lo, hi)) = rx.recv() {
                        let msg = match catch_unwind(AssertUnwindSafe(|| {
                            ctx.process_chunk(lo, hi)
                        })) {
                            Ok(outcome) => ChunkMessage::Done(outcome),
                            Err(_) => ChunkMessage::Failed,
                        };
                        if tx.send(msg).is_err() {
                            return;
                        }
                    }
                });
            }
            drop(out_tx);
            drop(task_rx);

            // ---- Collector ----
            let mut done = 0usize;
            for msg in out_rx.iter() {
                done += 1;
                match msg {
                    ChunkMessage::Done(outcome) => {
                        counters.add_chunk(outcome.attempts, outcome.hits.len() as u64);
                        all_hits.extend(outcome.hits);
                    }
                    ChunkMessage::Failed => counters.add_failed_chunk(),
                }
                if profile.progress_every > 0 && done % profile.progress_every == 0 {
                    print_progress(done, total_tasks, &counters, &timer);
                }
            }
        });
    }

    // Global ranking: descending score, ties broken by ascending position
    // in the index space. No early exit at max_hits; a later hit may
    // outrank earlier ones.
    all_hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.chunk_lo.cmp(&b.chunk_lo))
            .then_with(|| a.seq.cmp(&b.seq))
    });
    all_hits.truncate(profile.max_hits);

    timer.finish();
    SearchReport {
        hits: all_hits,
        snapshot: SearchSnapshot::from(&counters, &timer, total_tasks as u64),
    }
}
