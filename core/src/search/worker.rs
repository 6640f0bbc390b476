//! search/worker.rs
//! Per-worker state and chunk processing.

use crate::scoring::{combined_score, common_words};
use crate::stages::Metadata;
use crate::utils::mixed_radix_unrank;

use super::{RunConfig, SearchSpace, StageExecutor};

/// One scored result at or above the threshold. `chunk_lo` and `seq`
/// record where in the index space the hit came from; they are the
/// secondary sort key that keeps the final ranking deterministic.
#[derive(Clone, Debug)]
pub struct Hit {
    pub score: f64,
    pub meta: Metadata,
    pub chunk_lo: u64,
    pub seq: u64,
}

/// Everything one processed chunk reports back to the orchestrator.
#[derive(Debug, Default)]
pub struct ChunkOutcome {
    pub attempts: u64,
    pub hits: Vec<Hit>,
}

/// Per-worker state, initialized once: a persistent executor over the
/// dictionary snapshot, the radix vector, and a reusable digit buffer so
/// the hot loop never allocates per index.
pub struct WorkerContext {
    executor: StageExecutor,
    bases: Vec<u64>,
    threshold: f64,
    scratch: Vec<u64>,
}

impl WorkerContext {
    pub fn new(config: &RunConfig, space: &SearchSpace) -> Self {
        Self {
            executor: StageExecutor::new(config),
            bases: space.bases.clone(),
            threshold: config.threshold,
            scratch: Vec::with_capacity(space.bases.len()),
        }
    }

    /// Process the index range [lo, hi): decode each index into a
    /// parameter tuple, run the pipeline, score surviving payloads, and
    /// collect hits in ascending index order.
    pub fn process_chunk(&mut self, lo: u64, hi: u64) -> ChunkOutcome {
        let words = common_words();
        let mut hits = Vec::new();

        for x in lo..hi {
            mixed_radix_unrank(x, &self.bases, &mut self.scratch);
            if let Some((payload, meta)) = self.executor.run(&self.scratch) {
                let score = combined_score(payload.as_bytes(), words);
                if score >= self.threshold {
                    hits.push(Hit {
                        score,
                        meta,
                        chunk_lo: lo,
                        seq: x - lo,
                    });
                }
            }
        }

        ChunkOutcome {
            attempts: hi - lo,
            hits,
        }
    }
}
