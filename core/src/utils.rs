//! utils.rs
//! Dictionary loading and mixed-radix index arithmetic.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a candidate-key dictionary, one key per line.
///
/// Lines are trimmed; blank lines are dropped; duplicate keys keep their
/// first occurrence so axis indices stay stable for a given input file.
pub fn load_dictionary(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut keys = Vec::new();
    let mut seen = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if seen.insert(word.to_string()) {
            keys.push(word.to_string());
        }
    }
    Ok(keys)
}

/// Limit the dictionary to the first N keys (0 = no limit).
pub fn limit_keys(mut keys: Vec<String>, limit: usize) -> Vec<String> {
    if limit > 0 && keys.len() > limit {
        keys.truncate(limit);
    }
    keys
}

/// Convert a linear index to mixed-radix digits, axis 0 varying fastest.
///
/// `d_j = (x / (r_0 * ... * r_{j-1})) % r_j`, the canonical enumeration
/// order of the parameter space. Writes into `out` to avoid a per-index
/// allocation in the hot loop.
pub fn mixed_radix_unrank(x: u64, bases: &[u64], out: &mut Vec<u64>) {
    out.clear();
    let mut rest = x;
    for &b in bases {
        debug_assert!(b > 0);
        out.push(rest % b);
        rest /= b;
    }
}

/// Inverse of `mixed_radix_unrank`; digit slice must match `bases` in length.
pub fn mixed_radix_rank(digits: &[u64], bases: &[u64]) -> u64 {
    debug_assert_eq!(digits.len(), bases.len());
    let mut x = 0u64;
    let mut place = 1u64;
    for (&d, &b) in digits.iter().zip(bases) {
        x += d * place;
        place *= b;
    }
    x
}
