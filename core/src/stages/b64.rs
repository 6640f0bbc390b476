//! stages/b64.rs
//! Base64 decode stage.
//!
//! Strictly text -> bytes; the payload is never auto-promoted back to text
//! even when the decoded bytes happen to be printable.

use base64::Engine;
use bytes::Bytes;

use super::{Metadata, Payload, PayloadKind, StageError, StageId, StageTransform};

/// Standard Base64 decode. Invalid characters or padding fail the tuple.
pub fn base64_decode(input: &str) -> Result<Vec<u8>, StageError> {
    base64::engine::general_purpose::STANDARD
        .decode(input)
        .map_err(|e| StageError::DecodeFailed {
            stage: "b64",
            msg: e.to_string(),
        })
}

pub fn base64_encode(input: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(input)
}

/// Base64 stage: text -> bytes, no axis.
pub struct Base64Stage;

impl StageTransform for Base64Stage {
    fn id(&self) -> StageId {
        StageId::B64
    }

    fn accepts(&self, kind: PayloadKind) -> bool {
        kind == PayloadKind::Text
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
        let Payload::Text(text) = payload else {
            return Err(StageError::KindMismatch {
                stage: "b64",
                have: payload.kind(),
            });
        };
        Ok(Payload::Bytes(Bytes::from(base64_decode(text)?)))
    }
}
