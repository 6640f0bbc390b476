//! stages/columnar.rs
//! Columnar transposition keyed by the rank order of the keyword.

use std::sync::Arc;

use super::{MetaValue, Metadata, Payload, PayloadKind, StageError, StageId, StageTransform};

/// Keyword with duplicate characters removed, first occurrence winning.
/// The unique-stripped length is the column count.
fn unique_key_chars(keyword: &str) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if !out.contains(&ch) {
            out.push(ch);
        }
    }
    out
}

/// Rank of each key character: sorted by (character, original position),
/// so ties break left-to-right.
fn key_order(key: &[char]) -> Vec<usize> {
    let mut pairs: Vec<(char, usize)> = key.iter().copied().zip(0..).collect();
    pairs.sort();
    let mut order = vec![0; key.len()];
    for (rank, &(_, original_i)) in pairs.iter().enumerate() {
        order[original_i] = rank;
    }
    order
}

/// Column lengths for a grid of `n` characters over `k` columns; the last
/// `rows*k - n` columns sit under the short final row.
fn column_lengths(n: usize, k: usize) -> (usize, Vec<usize>) {
    let rows = n.div_ceil(k);
    let shaded = rows * k - n;
    let mut col_lens = vec![rows; k];
    for len in col_lens.iter_mut().skip(k - shaded) {
        *len -= 1;
    }
    (rows, col_lens)
}

/// Decrypt a columnar transposition: slice the ciphertext into columns in
/// key-rank order, then read the grid row by row.
pub fn columnar_decrypt(cipher: &str, keyword: &str) -> String {
    let key = unique_key_chars(keyword);
    let k = key.len();
    if k <= 1 {
        return cipher.to_string();
    }

    let chars: Vec<char> = cipher.chars().collect();
    let n = chars.len();
    let (rows, col_lens) = column_lengths(n, k);
    let order = key_order(&key);

    let mut rank_to_col = vec![0; k];
    for (col_idx, &rank) in order.iter().enumerate() {
        rank_to_col[rank] = col_idx;
    }

    let mut cols: Vec<&[char]> = vec![&[]; k];
    let mut idx = 0;
    for rank in 0..k {
        let col = rank_to_col[rank];
        cols[col] = &chars[idx..idx + col_lens[col]];
        idx += col_lens[col];
    }

    let mut out = String::with_capacity(n);
    for r in 0..rows {
        for col in cols.iter() {
            if r < col.len() {
                out.push(col[r]);
            }
        }
    }
    out
}

/// Encrypt a columnar transposition: write the plaintext row by row into
/// the grid, then emit the columns in key-rank order.
pub fn columnar_encrypt(plain: &str, keyword: &str) -> String {
    let key = unique_key_chars(keyword);
    let k = key.len();
    if k <= 1 {
        return plain.to_string();
    }

    let chars: Vec<char> = plain.chars().collect();
    let n = chars.len();
    let (_, col_lens) = column_lengths(n, k);
    let order = key_order(&key);

    let mut rank_to_col = vec![0; k];
    for (col_idx, &rank) in order.iter().enumerate() {
        rank_to_col[rank] = col_idx;
    }

    let mut out = String::with_capacity(n);
    for rank in 0..k {
        let col = rank_to_col[rank];
        for r in 0..col_lens[col] {
            out.push(chars[r * k + col]);
        }
    }
    out
}

/// Columnar stage: text -> text, one axis entry per dictionary key.
pub struct ColumnarStage {
    keys: Arc<Vec<String>>,
}

impl ColumnarStage {
    pub fn new(keys: Arc<Vec<String>>) -> Self {
        Self { keys }
    }
}

impl StageTransform for ColumnarStage {
    fn id(&self) -> StageId {
        StageId::Columnar
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
                stage: "columnar",
                have: payload.kind(),
            });
        };
        let key = &self.keys[param as usize];
        meta.push("columnar_key", MetaValue::Str(key.clone()));
        Ok(Payload::Text(columnar_decrypt(text, key)))
    }
}
