use std::io;

use crate::search::pipeline::PipelineError;

/// Unified solver error covering I/O, pipeline validation, and generic
/// configuration problems.
/// - Ergonomic `From<T>` impls enable `?` across the crate.
/// - Per-tuple stage failures are NOT represented here; those are silent
///   drops inside the search loop (see `stages::StageError`).
#[derive(Debug)]
pub enum SolverError {
    /// I/O error (dictionary or word-list read).
    Io(io::Error),

    /// Pipeline-level error (parse, axes, space sizing).
    Pipeline(PipelineError),

    /// Generic high-level validation with a descriptive message.
    Validation(String),
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::Io(e) => write!(f, "I/O error: {}", e),
            SolverError::Pipeline(e) => write!(f, "pipeline error: {}", e),
            SolverError::Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<io::Error> for SolverError {
    fn from(e: io::Error) -> Self {
        SolverError::Io(e)
    }
}

impl From<PipelineError> for SolverError {
    fn from(e: PipelineError) -> Self {
        SolverError::Pipeline(e)
    }
}
