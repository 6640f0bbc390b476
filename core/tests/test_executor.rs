#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use solver_core::search::{RunConfig, StageExecutor};
    use solver_core::stages::b64::base64_encode;
    use solver_core::stages::xor::repeating_xor;
    use solver_core::stages::{BifidAlphabet, MetaValue, Payload, StageId};

    fn config(ciphertext: &str, keys: &[&str], stages: Vec<StageId>) -> RunConfig {
        RunConfig {
            ciphertext: ciphertext.to_string(),
            keys: Arc::new(keys.iter().map(|s| s.to_string()).collect()),
            stages,
            bifid_alphabet: BifidAlphabet::Standard,
            threshold: 0.0,
        }
    }

    #[test]
    fn caesar_stage_records_shift_and_decrypts() {
        let executor = StageExecutor::new(&config("KHOOR ZRUOG", &[], vec![StageId::Caesar]));
        let (payload, meta) = executor.run(&[3]).expect("tuple should survive");

        assert_eq!(payload, Payload::Text("HELLO WORLD".to_string()));
        assert_eq!(meta.get("caesar_shift"), Some(&MetaValue::Int(3)));
        assert_eq!(meta.len(), 1);
    }

    #[test]
    fn b64_stage_always_yields_bytes() {
        let cipher = base64_encode(b"HELLO");
        let executor = StageExecutor::new(&config(&cipher, &[], vec![StageId::B64]));
        let (payload, meta) = executor.run(&[]).expect("tuple should survive");

        // Printable output stays tagged as bytes; no auto-promotion.
        assert!(matches!(payload, Payload::Bytes(ref b) if b.as_ref() == b"HELLO".as_slice()));
        assert!(meta.is_empty(), "b64 consumes no parameter");
    }

    #[test]
    fn b64_decode_failure_aborts_tuple() {
        let executor = StageExecutor::new(&config("not!base64!", &[], vec![StageId::B64]));
        assert!(executor.run(&[]).is_none());
    }

    #[test]
    fn kind_mismatch_aborts_tuple() {
        // b64 emits bytes; caesar only accepts text.
        let cipher = base64_encode(b"HELLO");
        let executor = StageExecutor::new(&config(
            &cipher,
            &[],
            vec![StageId::B64, StageId::Caesar],
        ));
        assert!(executor.run(&[0]).is_none());
    }

    #[test]
    fn cursor_skips_fixed_stages() {
        let executor = StageExecutor::new(&config(
            "DLROW OLLEH",
            &[],
            vec![StageId::Reverse, StageId::Caesar],
        ));
        let (payload, meta) = executor.run(&[0]).expect("tuple should survive");

        assert_eq!(payload, Payload::Text("HELLO WORLD".to_string()));
        // Reverse consumes no parameter and records nothing.
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("caesar_shift"), Some(&MetaValue::Int(0)));
    }

    #[test]
    fn double_columnar_factors_one_index_into_two_keys() {
        let executor = StageExecutor::new(&config(
            "ABCDEF",
            &["ALPHA", "BRAVO"],
            vec![StageId::DoubleColumnar],
        ));
        // idx 1 -> (1 / 2, 1 % 2) = keys[0], keys[1]
        let (_, meta) = executor.run(&[1]).expect("tuple should survive");
        assert_eq!(
            meta.get("double_columnar_keys"),
            Some(&MetaValue::StrPair("ALPHA".to_string(), "BRAVO".to_string()))
        );
    }

    #[test]
    fn xor_accepts_text_and_bytes() {
        let xored = repeating_xor(b"HELLO", b"KEY");

        // Text input: coerced to UTF-8 bytes.
        let executor = StageExecutor::new(&config("HELLO", &["KEY"], vec![StageId::Xor]));
        let (payload, meta) = executor.run(&[0]).expect("tuple should survive");
        assert!(matches!(payload, Payload::Bytes(ref b) if b.as_ref() == xored.as_slice()));
        assert_eq!(
            meta.get("xor_key"),
            Some(&MetaValue::Str("KEY".to_string()))
        );

        // Bytes input: b64 first, then xor over the decoded bytes.
        let cipher = base64_encode(&xored);
        let executor = StageExecutor::new(&config(
            &cipher,
            &["KEY"],
            vec![StageId::B64, StageId::Xor],
        ));
        let (payload, _) = executor.run(&[0]).expect("tuple should survive");
        assert!(matches!(payload, Payload::Bytes(ref b) if b.as_ref() == b"HELLO".as_slice()));
    }

    #[test]
    fn empty_xor_key_aborts_tuple() {
        let executor = StageExecutor::new(&config("HELLO", &[""], vec![StageId::Xor]));
        assert!(executor.run(&[0]).is_none());
    }

    #[test]
    fn executor_is_pure() {
        let executor = StageExecutor::new(&config(
            "GSRH RH ZHVXIVG",
            &["KEY", "ZOMBIE"],
            vec![StageId::Caesar, StageId::Columnar, StageId::Xor],
        ));
        let first = executor.run(&[11, 1, 0]);
        let second = executor.run(&[11, 1, 0]);
        assert_eq!(
            first.as_ref().map(|(p, m)| (p.clone(), m.clone())),
            second.as_ref().map(|(p, m)| (p.clone(), m.clone())),
        );
        assert!(first.is_some());
    }

    #[test]
    fn single_character_payload_survives_every_text_stage() {
        for stages in [
            vec![StageId::Caesar],
            vec![StageId::Railfence],
            vec![StageId::Bifid],
            vec![StageId::Columnar],
            vec![StageId::DoubleColumnar],
            vec![StageId::Xor],
            vec![StageId::Reverse],
        ] {
            let executor = StageExecutor::new(&config("A", &["KEY"], stages.clone()));
            assert!(
                executor.run(&[0]).is_some(),
                "stage {:?} dropped a single-char payload",
                stages[0]
            );
        }
    }

    #[test]
    fn empty_ciphertext_does_not_crash() {
        let executor = StageExecutor::new(&config("", &["KEY"], vec![StageId::Caesar]));
        let (payload, _) = executor.run(&[5]).expect("empty text still flows");
        assert!(payload.is_empty());
    }
}
