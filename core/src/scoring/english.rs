//! scoring/english.rs
//! English-likeness scoring for decrypted payloads.
//!
//! The combined score is a pure map from bytes to a float in [0.0, 2.0]:
//! - `< 1.0`: payload contains non-printable bytes (the printable ratio)
//! - `>= 1.0`: fully printable; `1.0 + english` where `english` in [0, 1]
//!   weighs letter-frequency fit, common-word matches, and word spacing.

use std::collections::HashSet;

/// English letter frequencies A..Z.
/// Source: https://en.wikipedia.org/wiki/Letter_frequency
pub const ENGLISH_FREQ: [f64; 26] = [
    0.0817, // A
    0.0149, // B
    0.0278, // C
    0.0425, // D
    0.1270, // E
    0.0223, // F
    0.0202, // G
    0.0609, // H
    0.0697, // I
    0.0015, // J
    0.0077, // K
    0.0403, // L
    0.0241, // M
    0.0675, // N
    0.0751, // O
    0.0193, // P
    0.0010, // Q
    0.0599, // R
    0.0633, // S
    0.0906, // T
    0.0276, // U
    0.0098, // V
    0.0236, // W
    0.0015, // X
    0.0197, // Y
    0.0007, // Z
];

/// Chi-squared normalization divisor. Count-based chi-squared against
/// `ENGLISH_FREQ` sits near the 25 degrees of freedom for natural English
/// (freq sub-score ~0.95 at any length >= 20 letters) and climbs past 500
/// for uniform random letter soup once the payload holds ~100+ letters.
pub const CHI2_NORMALIZATION: f64 = 500.0;

/// Weighted combination of the sub-scores.
pub const WEIGHT_FREQ: f64 = 0.7;
pub const WEIGHT_WORDS: f64 = 0.3;

/// Ratio of printable ASCII bytes (32..127 plus tab/newline/CR), 0.0..=1.0.
/// Empty input rates 0.0.
pub fn printable_ratio(b: &[u8]) -> f64 {
    if b.is_empty() {
        return 0.0;
    }
    let printable = b
        .iter()
        .filter(|&&x| (32..127).contains(&x) || x == 9 || x == 10 || x == 13)
        .count();
    printable as f64 / b.len() as f64
}

/// Chi-squared letter-frequency fit, normalized so 0 is worst and 1 is best.
pub fn chi_squared_score(text: &str) -> f64 {
    let mut counts = [0u32; 26];
    let mut total = 0u32;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            counts[(ch.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
            total += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }

    let mut chi_squared = 0.0;
    for (i, &expected_freq) in ENGLISH_FREQ.iter().enumerate() {
        let expected = expected_freq * total as f64;
        let observed = counts[i] as f64;
        if expected > 0.0 {
            chi_squared += (observed - expected).powi(2) / expected;
        }
    }

    (1.0 - chi_squared / CHI2_NORMALIZATION).max(0.0)
}

/// Fraction of whitespace-delimited tokens found in the common-word set.
/// Tokens are stripped of non-alphabetic characters and uppercased.
pub fn word_score(text: &str, common_words: &HashSet<String>) -> f64 {
    let mut tokens = 0u32;
    let mut recognized = 0u32;
    for raw in text.split_whitespace() {
        let word: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if word.is_empty() {
            continue;
        }
        tokens += 1;
        if common_words.contains(&word) {
            recognized += 1;
        }
    }
    if tokens == 0 {
        return 0.0;
    }
    recognized as f64 / tokens as f64
}

/// Word-spacing bonus: triangular in the space ratio, peaking at 0.2 on
/// [0.15, 0.20] and decaying linearly to 0 at 0.05 and 0.35.
pub fn space_bonus(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let spaces = text.bytes().filter(|&b| b == b' ').count();
    let ratio = spaces as f64 / text.len() as f64;

    if !(0.05..=0.35).contains(&ratio) {
        0.0
    } else if ratio < 0.15 {
        0.2 * (ratio - 0.05) / 0.10
    } else if ratio <= 0.20 {
        0.2
    } else {
        0.2 * (0.35 - ratio) / 0.15
    }
}

/// English sub-score in [0, 1]: frequency fit, word matches, spacing bonus.
pub fn english_score(text: &str, common_words: &HashSet<String>) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let combined = WEIGHT_FREQ * chi_squared_score(text)
        + WEIGHT_WORDS * word_score(text, common_words)
        + space_bonus(text);
    combined.min(1.0)
}

/// Combined score in [0.0, 2.0] for a final payload.
///
/// Payloads with any non-printable byte score below 1.0 (their printable
/// ratio); fully printable payloads score `1.0 + english_score`.
pub fn combined_score(b: &[u8], common_words: &HashSet<String>) -> f64 {
    let pr = printable_ratio(b);
    if pr < 1.0 {
        return pr;
    }
    // Fully printable implies ASCII, so the UTF-8 view always exists.
    match std::str::from_utf8(b) {
        Ok(text) => 1.0 + english_score(text, common_words),
        Err(_) => pr,
    }
}
