//! search: pipeline model, stage executor, workers, and the parallel
//! orchestrator.

use std::sync::Arc;

use crate::stages::BifidAlphabet;
use crate::stages::StageId;

pub mod executor;
pub mod parallel;
pub mod pipeline;
pub mod worker;

pub use executor::StageExecutor;
pub use parallel::{run_search, SearchProfile, SearchReport};
pub use pipeline::{parse_pipeline, PipelineError, SearchSpace, StageAxis};
pub use worker::{ChunkOutcome, Hit, WorkerContext};

/// Immutable run state shared by every worker: the parsed pipeline, the
/// dictionary snapshot, the starting ciphertext, and the threshold.
/// Sent once to each worker at startup and never mutated.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub ciphertext: String,
    pub keys: Arc<Vec<String>>,
    pub stages: Vec<StageId>,
    pub bifid_alphabet: BifidAlphabet,
    pub threshold: f64,
}
