//! stages/double_columnar.rs
//! Two-round columnar transposition over an ordered key pair.

use std::sync::Arc;

use super::columnar::{columnar_decrypt, columnar_encrypt};
use super::{MetaValue, Metadata, Payload, PayloadKind, StageError, StageId, StageTransform};

/// Undo `columnar_encrypt(columnar_encrypt(p, key1), key2)`: strip the
/// second round first, then the first.
pub fn double_columnar_decrypt(cipher: &str, key1: &str, key2: &str) -> String {
    columnar_decrypt(&columnar_decrypt(cipher, key2), key1)
}

pub fn double_columnar_encrypt(plain: &str, key1: &str, key2: &str) -> String {
    columnar_encrypt(&columnar_encrypt(plain, key1), key2)
}

/// Double columnar stage: text -> text, one axis over all ordered key
/// pairs. The single axis index factors into (idx / n, idx % n).
pub struct DoubleColumnarStage {
    keys: Arc<Vec<String>>,
}

impl DoubleColumnarStage {
    pub fn new(keys: Arc<Vec<String>>) -> Self {
        Self { keys }
    }
}

impl StageTransform for DoubleColumnarStage {
    fn id(&self) -> StageId {
        StageId::DoubleColumnar
    }

    fn accepts(&self, kind: PayloadKind) -> bool {
        kind == PayloadKind::Text
    }

    fn axis_len(&self) -> Option<u64> {
        let n = self.keys.len() as u64;
        Some(n * n)
    }

    fn apply(
        &self,
        payload: &Payload,
        param: u64,
        meta: &mut Metadata,
    ) -> Result<Payload, StageError> {
        let Payload::Text(text) = payload else {
            return Err(StageError::KindMismatch {
                stage: "double_columnar",
                have: payload.kind(),
            });
        };
        let n = self.keys.len() as u64;
        let key1 = &self.keys[(param / n) as usize];
        let key2 = &self.keys[(param % n) as usize];
        meta.push(
            "double_columnar_keys",
            MetaValue::StrPair(key1.clone(), key2.clone()),
        );
        Ok(Payload::Text(double_columnar_decrypt(text, key1, key2)))
    }
}
