//! scoring/words.rs
//! Common-word table for the word-match sub-score.
//!
//! The list ships with the crate and is built once per process; workers
//! share the same read-only set.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Roughly six hundred high-frequency English words, one per line.
const COMMON_WORDS_RAW: &str = include_str!("common_words.txt");

static COMMON_WORDS: OnceLock<HashSet<String>> = OnceLock::new();

/// Shared read-only common-word set, uppercased at load time.
pub fn common_words() -> &'static HashSet<String> {
    COMMON_WORDS.get_or_init(|| {
        COMMON_WORDS_RAW
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_uppercase)
            .collect()
    })
}
