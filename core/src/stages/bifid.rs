//! stages/bifid.rs
//! Bifid fractionation over a keyed Polybius square.
//!
//! The period equals the stripped input length, so the whole payload is a
//! single fractionation block. Characters outside the square's alphabet
//! are stripped and not reinserted.

use std::collections::HashMap;
use std::sync::Arc;

use super::{MetaValue, Metadata, Payload, PayloadKind, StageError, StageId, StageTransform};
use crate::constants::{BIFID_BASE64_ALPHABET, BIFID_STANDARD_ALPHABET};

/// Which Polybius square the bifid stage runs over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BifidAlphabet {
    /// 25 letters, 5x5, J merged into I.
    Standard,
    /// 64 characters, 8x8 (A-Z a-z 0-9 + /).
    Base64,
}

impl BifidAlphabet {
    pub fn alphabet(&self) -> &'static str {
        match self {
            BifidAlphabet::Standard => BIFID_STANDARD_ALPHABET,
            BifidAlphabet::Base64 => BIFID_BASE64_ALPHABET,
        }
    }

    /// Square side length (alphabet length is its square).
    pub fn size(&self) -> usize {
        match self {
            BifidAlphabet::Standard => 5,
            BifidAlphabet::Base64 => 8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BifidAlphabet::Standard => "standard",
            BifidAlphabet::Base64 => "base64",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(BifidAlphabet::Standard),
            "base64" => Some(BifidAlphabet::Base64),
            _ => None,
        }
    }

    /// Fold one input character into the square's character set.
    /// Standard squares are uppercase-only with J merged into I.
    fn normalize(&self, ch: char) -> char {
        match self {
            BifidAlphabet::Standard => {
                let up = ch.to_ascii_uppercase();
                if up == 'J' {
                    'I'
                } else {
                    up
                }
            }
            BifidAlphabet::Base64 => ch,
        }
    }
}

/// Build a keyed Polybius square: unique key characters first (uppercased,
/// restricted to the alphabet), then the remaining alphabet in order.
pub fn build_keyed_square(alphabet: &str, key: &str) -> String {
    let mut out = String::with_capacity(alphabet.len());
    for ch in key.to_uppercase().chars().chain(alphabet.chars()) {
        if alphabet.contains(ch) && !out.contains(ch) {
            out.push(ch);
        }
    }
    out
}

fn square_positions(square: &str) -> HashMap<char, usize> {
    square.chars().enumerate().map(|(i, ch)| (ch, i)).collect()
}

/// Decrypt a bifid block: each character becomes its (row, col) digits in
/// order; the first half of that digit stream is re-paired against the
/// second half and looked up in the square.
pub fn bifid_decrypt(text: &str, key: &str, alphabet: BifidAlphabet) -> String {
    let keyed = build_keyed_square(alphabet.alphabet(), key);
    let pos = square_positions(&keyed);
    let square: Vec<char> = keyed.chars().collect();
    let size = alphabet.size();

    let indices: Vec<usize> = text
        .chars()
        .map(|ch| alphabet.normalize(ch))
        .filter_map(|ch| pos.get(&ch).copied())
        .collect();
    let m = indices.len();

    let mut coords = Vec::with_capacity(2 * m);
    for idx in &indices {
        coords.push(idx / size);
        coords.push(idx % size);
    }

    (0..m)
        .map(|i| square[coords[i] * size + coords[m + i]])
        .collect()
}

/// Encrypt a bifid block: row digits of every character, then column
/// digits, read back as consecutive (row, col) pairs.
pub fn bifid_encrypt(text: &str, key: &str, alphabet: BifidAlphabet) -> String {
    let keyed = build_keyed_square(alphabet.alphabet(), key);
    let pos = square_positions(&keyed);
    let square: Vec<char> = keyed.chars().collect();
    let size = alphabet.size();

    let indices: Vec<usize> = text
        .chars()
        .map(|ch| alphabet.normalize(ch))
        .filter_map(|ch| pos.get(&ch).copied())
        .collect();
    let m = indices.len();

    let mut coords = Vec::with_capacity(2 * m);
    for idx in &indices {
        coords.push(idx / size);
    }
    for idx in &indices {
        coords.push(idx % size);
    }

    (0..m)
        .map(|i| square[coords[2 * i] * size + coords[2 * i + 1]])
        .collect()
}

/// Bifid stage: text -> text, one axis entry per dictionary key.
pub struct BifidStage {
    keys: Arc<Vec<String>>,
    alphabet: BifidAlphabet,
}

impl BifidStage {
    pub fn new(keys: Arc<Vec<String>>, alphabet: BifidAlphabet) -> Self {
        Self { keys, alphabet }
    }
}

impl StageTransform for BifidStage {
    fn id(&self) -> StageId {
        StageId::Bifid
    }

    fn accepts(&self, kind: PayloadKind) -> bool {
        kind == PayloadKind::Text
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
        let Payload::Text(text) = payload else {
            return Err(StageError::KindMismatch {
                stage: "bifid",
                have: payload.kind(),
            });
        };
        let key = &self.keys[param as usize];
        meta.push("bifid_key", MetaValue::Str(key.clone()));
        Ok(Payload::Text(bifid_decrypt(text, key, self.alphabet)))
    }
}
