//! stages/caesar.rs
//! Caesar shift over ASCII letters.

use super::{MetaValue, Metadata, Payload, PayloadKind, StageError, StageId, StageTransform};
use crate::constants::CAESAR_SHIFTS;

/// Shift every ASCII letter back by `shift`, staying inside its case
/// family; all other characters pass through untouched.
pub fn caesar_decrypt_text(text: &str, shift: u32) -> String {
    caesar_encrypt_text(text, (CAESAR_SHIFTS - shift % CAESAR_SHIFTS) % CAESAR_SHIFTS)
}

/// Shift every ASCII letter forward by `shift` within its case family.
pub fn caesar_encrypt_text(text: &str, shift: u32) -> String {
    let shift = (shift % CAESAR_SHIFTS) as u8;
    text.chars()
        .map(|ch| match ch {
            'A'..='Z' => (b'A' + (ch as u8 - b'A' + shift) % 26) as char,
            'a'..='z' => (b'a' + (ch as u8 - b'a' + shift) % 26) as char,
            _ => ch,
        })
        .collect()
}

/// Caesar stage: text -> text, axis of 26 shifts.
pub struct CaesarStage;

impl StageTransform for CaesarStage {
    fn id(&self) -> StageId {
        StageId::Caesar
    }

    fn accepts(&self, kind: PayloadKind) -> bool {
        kind == PayloadKind::Text
    }

    fn axis_len(&self) -> Option<u64> {
        Some(CAESAR_SHIFTS as u64)
    }

    fn apply(
        &self,
        payload: &Payload,
        param: u64,
        meta: &mut Metadata,
    ) -> Result<Payload, StageError> {
        let Payload::Text(text) = payload else {
            return Err(StageError::KindMismatch {
                stage: "caesar",
                have: payload.kind(),
            });
        };
        let shift = param as u32;
        meta.push("caesar_shift", MetaValue::Int(shift as i64));
        Ok(Payload::Text(caesar_decrypt_text(text, shift)))
    }
}
