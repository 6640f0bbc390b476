//! stages/railfence.rs
//! Rail fence zigzag transposition.

use super::{MetaValue, Metadata, Payload, PayloadKind, StageError, StageId, StageTransform};
use crate::constants::{RAILFENCE_AXIS, RAILFENCE_MIN_RAILS};

/// Rail index for each position of a zigzag of length `n` over `rails`.
fn rail_pattern(n: usize, rails: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(n);
    let mut rail = 0usize;
    let mut down = true;
    for _ in 0..n {
        pattern.push(rail);
        if rail == 0 {
            down = true;
        } else if rail == rails - 1 {
            down = false;
        }
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
    }
    pattern
}

/// Decrypt a rail fence cipher: fill the rails with consecutive ciphertext
/// characters, then read back in zigzag position order.
pub fn railfence_decrypt(cipher: &str, rails: usize) -> String {
    if rails <= 1 {
        return cipher.to_string();
    }
    let chars: Vec<char> = cipher.chars().collect();
    let n = chars.len();
    if n == 0 {
        return String::new();
    }

    let pattern = rail_pattern(n, rails);
    let mut result = vec!['\0'; n];
    let mut cipher_idx = 0;
    for rail in 0..rails {
        for (pos, &r) in pattern.iter().enumerate() {
            if r == rail {
                result[pos] = chars[cipher_idx];
                cipher_idx += 1;
            }
        }
    }
    result.into_iter().collect()
}

/// Encrypt a rail fence cipher: write the zigzag, read rails top to bottom.
pub fn railfence_encrypt(plain: &str, rails: usize) -> String {
    if rails <= 1 {
        return plain.to_string();
    }
    let chars: Vec<char> = plain.chars().collect();
    let pattern = rail_pattern(chars.len(), rails);

    let mut out = String::with_capacity(chars.len());
    for rail in 0..rails {
        for (pos, &r) in pattern.iter().enumerate() {
            if r == rail {
                out.push(chars[pos]);
            }
        }
    }
    out
}

/// Rail fence stage: text -> text, axis over rail counts 2..=30.
pub struct RailfenceStage;

impl StageTransform for RailfenceStage {
    fn id(&self) -> StageId {
        StageId::Railfence
    }

    fn accepts(&self, kind: PayloadKind) -> bool {
        kind == PayloadKind::Text
    }

    fn axis_len(&self) -> Option<u64> {
        Some(RAILFENCE_AXIS as u64)
    }

    fn apply(
        &self,
        payload: &Payload,
        param: u64,
        meta: &mut Metadata,
    ) -> Result<Payload, StageError> {
        let Payload::Text(text) = payload else {
            return Err(StageError::KindMismatch {
                stage: "railfence",
                have: payload.kind(),
            });
        };
        let rails = param as u32 + RAILFENCE_MIN_RAILS;
        meta.push("railfence_rails", MetaValue::Int(rails as i64));
        Ok(Payload::Text(railfence_decrypt(text, rails as usize)))
    }
}
