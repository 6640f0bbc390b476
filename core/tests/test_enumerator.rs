#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use solver_core::utils::{mixed_radix_rank, mixed_radix_unrank};

    #[test]
    fn axis_zero_varies_fastest() {
        let bases = [26, 4];
        let mut out = Vec::new();
        mixed_radix_unrank(0, &bases, &mut out);
        assert_eq!(out, vec![0, 0]);
        mixed_radix_unrank(1, &bases, &mut out);
        assert_eq!(out, vec![1, 0]);
        mixed_radix_unrank(26, &bases, &mut out);
        assert_eq!(out, vec![0, 1]);
        mixed_radix_unrank(103, &bases, &mut out);
        assert_eq!(out, vec![25, 3]);
    }

    #[test]
    fn empty_radix_vector_decodes_to_empty_tuple() {
        let mut out = vec![99];
        mixed_radix_unrank(0, &[], &mut out);
        assert!(out.is_empty());
        assert_eq!(mixed_radix_rank(&[], &[]), 0);
    }

    #[test]
    fn digits_stay_within_their_base() {
        let bases = [26, 29, 7];
        let mut out = Vec::new();
        let total: u64 = bases.iter().product();
        for x in 0..total {
            mixed_radix_unrank(x, &bases, &mut out);
            for (d, b) in out.iter().zip(&bases) {
                assert!(d < b, "digit {} out of base {} at index {}", d, b, x);
            }
        }
    }

    proptest! {
        // decode . encode = id over the whole space (capped at 10^6).
        #[test]
        fn prop_rank_inverts_unrank(bases in proptest::collection::vec(1u64..=50, 1..=4)) {
            let total: u64 = bases.iter().product();
            prop_assume!(total <= 1_000_000);

            let mut out = Vec::new();
            let step = (total / 997).max(1);
            for x in (0..total).step_by(step as usize) {
                mixed_radix_unrank(x, &bases, &mut out);
                prop_assert_eq!(mixed_radix_rank(&out, &bases), x);
            }
        }

        // encode . decode = id on arbitrary in-range digit tuples.
        #[test]
        fn prop_unrank_inverts_rank(
            bases in proptest::collection::vec(2u64..=50, 1..=4),
            seed in any::<u64>(),
        ) {
            let total: u64 = bases.iter().product();
            prop_assume!(total <= 1_000_000);

            let digits: Vec<u64> = bases.iter().map(|b| seed % b).collect();
            let x = mixed_radix_rank(&digits, &bases);
            prop_assert!(x < total);

            let mut out = Vec::new();
            mixed_radix_unrank(x, &bases, &mut out);
            prop_assert_eq!(out, digits);
        }
    }
}
