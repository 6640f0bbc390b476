//! search/executor.rs
//! Threads one payload through the stage chain for one parameter tuple.

use crate::stages::{create_stage_set, Metadata, Payload, StageContext, StageTransform};

use super::RunConfig;

/// Executes the stage chain against the starting ciphertext.
///
/// Holds its own boxed stage set so each worker can run without touching
/// shared mutable state. A parameter tuple either produces exactly one
/// payload or nothing: any kind mismatch or stage failure aborts the
/// tuple silently.
pub struct StageExecutor {
    stages: Vec<Box<dyn StageTransform>>,
    ciphertext: String,
}

impl StageExecutor {
    pub fn new(config: &RunConfig) -> Self {
        let ctx = StageContext {
            keys: config.keys.clone(),
            bifid_alphabet: config.bifid_alphabet,
        };
        Self {
            stages: create_stage_set(&config.stages, &ctx),
            ciphertext: config.ciphertext.clone(),
        }
    }

    /// Run the pipeline for one parameter tuple.
    ///
    /// The tuple cursor advances by one per axis-bearing stage, in pipeline
    /// order. Returns the final payload and the metadata identifying every
    /// consumed parameter, or None when the tuple aborts.
    pub fn run(&self, params: &[u64]) -> Option<(Payload, Metadata)> {
        let mut meta = Metadata::new();
        let mut payload = Payload::Text(self.ciphertext.clone());
        let mut cursor = 0usize;

        for stage in &self.stages {
            if !stage.accepts(payload.kind()) {
                return None;
            }
            let param = match stage.axis_len() {
                Some(_) => {
                    let p = params[cursor];
                    cursor += 1;
                    p
                }
                None => 0,
            };
            payload = stage.apply(&payload, param, &mut meta).ok()?;
        }

        Some((payload, meta))
    }
}
