//! stages/xor.rs
//! Repeating-key XOR.

use std::sync::Arc;

use bytes::Bytes;

use super::{MetaValue, Metadata, Payload, PayloadKind, StageError, StageId, StageTransform};

/// XOR `data` against `key` repeated cyclically. Output length equals
/// input length.
pub fn repeating_xor(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(key.iter().cycle())
        .map(|(a, b)| a ^ b)
        .collect()
}

/// XOR stage: text or bytes in, bytes out; one axis entry per dictionary
/// key. Text input is coerced to its UTF-8 bytes first.
pub struct XorStage {
    keys: Arc<Vec<String>>,
}

impl XorStage {
    pub fn new(keys: Arc<Vec<String>>) -> Self {
        Self { keys }
    }
}

impl StageTransform for XorStage {
    fn id(&self) -> StageId {
        StageId::Xor
    }

    fn accepts(&self, _kind: PayloadKind) -> bool {
        true
    }

    fn axis_len(&self) -> Option<u64> {
        Some(self.keys.len() as u64)
    }

    fn apply(
        &self,
        payload: &Payload,
        param: u64,
        meta: &mut Metadata,
    ) -> Result<Payload, StageError> {
        let key = &self.keys[param as usize];
        if key.is_empty() {
            return Err(StageError::EmptyKey { stage: "xor" });
        }
        meta.push("xor_key", MetaValue::Str(key.clone()));
        let out = repeating_xor(payload.as_bytes(), key.as_bytes());
        Ok(Payload::Bytes(Bytes::from(out)))
    }
}
