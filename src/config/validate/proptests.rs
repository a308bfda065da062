//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::tests::create_valid_spec;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = PipelineSpec> {
    (
        1usize..1024,    // sequence_length
        0.01f64..=1.0,   // mask_selection_rate
        1usize..128,     // mask_selection_length
        0.0f32..=1.0,    // mask_token_rate
        any::<u64>(),    // seed
    )
        .prop_map(|(seq_len, rate, length, mask_rate, seed)| {
            let mut spec = create_valid_spec();
            spec.tokenizer.options.sequence_length = seq_len;
            spec.masking = MaskingSpec {
                mask_selection_rate: rate,
                mask_selection_length: length,
                mask_token_rate: mask_rate,
                random_token_rate: (1.0 - mask_rate) / 2.0,
                unselectable_tokens: Vec::new(),
            };
            spec.seed = seed;
            spec
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_zero_seq_len_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.tokenizer.options.sequence_length = 0;
        prop_assert!(matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidSeqLen(0))
        ));
    }

    #[test]
    fn prop_rate_above_one_fails(spec in arb_valid_spec(), excess in 0.001f64..10.0) {
        let mut spec = spec;
        spec.masking.mask_selection_rate = 1.0 + excess;
        prop_assert!(matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidMaskRate(_))
        ));
    }

    #[test]
    fn prop_yaml_round_trip_stays_valid(spec in arb_valid_spec()) {
        let yaml = serde_yaml::to_string(&spec).unwrap();
        let parsed: PipelineSpec = serde_yaml::from_str(&yaml).unwrap();
        prop_assert!(validate_config(&parsed).is_ok());
        prop_assert_eq!(parsed.seed, spec.seed);
    }
}
