//! constants.rs
//! Stable stage IDs, search defaults, and cipher alphabets.

/// Stable stage IDs (u16) for the stage registry.
pub mod stage_ids {
    pub const CAESAR: u16          = 0x0001;
    pub const BIFID: u16           = 0x0002;
    pub const COLUMNAR: u16        = 0x0003;
    pub const DOUBLE_COLUMNAR: u16 = 0x0004;
    pub const B64: u16             = 0x0005;
    pub const XOR: u16             = 0x0006;
    pub const RAILFENCE: u16       = 0x0007;
    pub const REVERSE: u16         = 0x0008;
}

/// Defaults when Option<T> is None
pub const DEFAULT_THRESHOLD: f64 = 0.80;
pub const DEFAULT_MAX_HITS: usize = 50;
pub const DEFAULT_WORKERS: usize = 1;
pub const DEFAULT_CHUNK_SIZE: u64 = 10_000;
pub const DEFAULT_PROGRESS_EVERY: usize = 50;

/// Caesar alphabet size; shifts run 0..26.
pub const CAESAR_SHIFTS: u32 = 26;

/// Railfence rail counts swept per axis (2..=30 inclusive).
pub const RAILFENCE_MIN_RAILS: u32 = 2;
pub const RAILFENCE_MAX_RAILS: u32 = 30;
pub const RAILFENCE_AXIS: u32 = RAILFENCE_MAX_RAILS - RAILFENCE_MIN_RAILS + 1;

/// Standard Bifid square: 25 letters, 5x5, J merged into I.
pub const BIFID_STANDARD_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Base64 Bifid square: 64 characters, 8x8.
pub const BIFID_BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Built-in sample ciphertext used when the caller supplies none.
pub const SAMPLE_CIPHERTEXT: &str =
    "kCmlgFi6GUJNgkNI1Q41fbfyLoCFTCvIqkZiI0KIAXAzP1U1uy1BE4UfPBfpKmmLObjYnQNRBaPtKiVWzc5A4v0w3xle8FOhAGJZ7g4in0wndJxMOvO3dc1M82at2T6935roTqyWDgtGD/hwwRF3oHqFM5Vcw1JtINbsgWRm4o4/quEDkZ7x1B275bX3/Fo1";
