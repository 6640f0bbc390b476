//! stages/reverse.rs
//! Reverse the payload; same kind in, same kind out. No parameter.

use bytes::Bytes;

use super::{Metadata, Payload, PayloadKind, StageError, StageId, StageTransform};

pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn reverse_bytes(data: &[u8]) -> Vec<u8> {
    data.iter().rev().copied().collect()
}

/// Reverse stage: character-reverse for text, byte-reverse for bytes.
pub struct ReverseStage;

impl StageTransform for ReverseStage {
    fn id(&self) -> StageId {
        StageId::Reverse
    }

    fn accepts(&self, _kind: PayloadKind) -> bool {
        true
    }

    fn axis_len(&self) -> Option<u64> {
        None
    }

    fn apply(
        &self,
        payload: &Payload,
        _param: u64,
        _meta: &mut Metadata,
    ) -> Result<Payload, StageError> {
        Ok(match payload {
            Payload::Text(s) => Payload::Text(reverse_text(s)),
            Payload::Bytes(b) => Payload::Bytes(Bytes::from(reverse_bytes(b))),
        })
    }
}
