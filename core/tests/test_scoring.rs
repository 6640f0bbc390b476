#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use solver_core::scoring::{
        chi_squared_score, combined_score, common_words, printable_ratio, space_bonus,
        word_score,
    };

    // --- Printable Ratio Tests ---

    #[test]
    fn printable_ratio_empty_is_zero() {
        assert_eq!(printable_ratio(b""), 0.0);
    }

    #[test]
    fn printable_ratio_counts_whitespace_controls() {
        assert_eq!(printable_ratio(b"hello world\t\r\n"), 1.0);
        assert_eq!(printable_ratio(b"ab\x00\x01"), 0.5);
    }

    // --- Frequency Tests ---

    #[test]
    fn english_text_has_good_frequency_fit() {
        let score = chi_squared_score("IT WAS THE BEST OF TIMES IT WAS THE WORST OF TIMES");
        assert!(score >= 0.85, "freq score was {}", score);
    }

    #[test]
    fn rare_letter_soup_has_poor_frequency_fit() {
        let score = chi_squared_score(&"ZQXJZQXJZQXJ".repeat(8));
        assert!(score < 0.15, "freq score was {}", score);
    }

    #[test]
    fn no_letters_scores_zero_frequency() {
        assert_eq!(chi_squared_score("12345 !!!"), 0.0);
    }

    // --- Word Match Tests ---

    #[test]
    fn word_score_counts_recognized_tokens() {
        let words = common_words();
        assert_eq!(word_score("THE QUICK BROWN FOX", words), 1.0);
        assert_eq!(word_score("XQZJ VWKY", words), 0.0);
        assert_eq!(word_score("THE XQZJW", words), 0.5);
    }

    #[test]
    fn word_score_strips_punctuation() {
        let words = common_words();
        assert_eq!(word_score("the, world!", words), 1.0);
    }

    // --- Space Bonus Tests ---

    #[test]
    fn space_bonus_peaks_in_band() {
        // 3 spaces / 16 chars = 0.1875, inside the plateau.
        assert_eq!(space_bonus("THE MAN WAS HERE"), 0.2);
        assert_eq!(space_bonus("THEMANWASHERE"), 0.0);
    }

    #[test]
    fn space_bonus_decays_linearly() {
        // 1 space / 11 chars ~= 0.0909 on the rising edge.
        let bonus = space_bonus("HELLO WORLD");
        assert!((bonus - 0.0818).abs() < 0.001, "bonus was {}", bonus);
    }

    #[test]
    fn space_bonus_zero_outside_band() {
        // All spaces: ratio 1.0, far past the upper cutoff.
        assert_eq!(space_bonus("     "), 0.0);
    }

    // --- Combined Score Tests ---

    #[test]
    fn english_sentence_scores_high() {
        let score = combined_score(b"THE MAN WAS HERE", common_words());
        assert!(score >= 1.85, "score was {}", score);
    }

    #[test]
    fn binary_payload_scores_below_one() {
        let score = combined_score(&[0x00, 0x41, 0xFF, 0x42], common_words());
        assert!(score < 1.0, "score was {}", score);
    }

    #[test]
    fn printable_gibberish_scores_at_least_one() {
        let score = combined_score(b"zzzz qqqq xxxx", common_words());
        assert!((1.0..=2.0).contains(&score), "score was {}", score);
    }

    #[test]
    fn empty_payload_scores_zero() {
        assert_eq!(combined_score(b"", common_words()), 0.0);
    }

    // Property-based checks: bounds and the printable boundary.
    proptest! {
        #[test]
        fn prop_score_stays_in_bounds(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let score = combined_score(&data, common_words());
            prop_assert!((0.0..=2.0).contains(&score), "score was {}", score);
        }

        #[test]
        fn prop_non_printable_byte_caps_score(data in proptest::collection::vec(any::<u8>(), 1..256)) {
            let printable = data
                .iter()
                .all(|&b| (32..127).contains(&b) || b == 9 || b == 10 || b == 13);
            let score = combined_score(&data, common_words());
            if printable {
                prop_assert!(score >= 1.0, "score was {}", score);
            } else {
                prop_assert!(score < 1.0, "score was {}", score);
            }
        }

        #[test]
        fn prop_score_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..128)) {
            let a = combined_score(&data, common_words());
            let b = combined_score(&data, common_words());
            prop_assert_eq!(a, b);
        }
    }
}
