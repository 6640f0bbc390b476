//! scoring: English-likeness rating for candidate plaintexts.

pub mod english;
pub mod words;

pub use english::{
    chi_squared_score, combined_score, english_score, printable_ratio, space_bonus, word_score,
};
pub use words::common_words;
