//! Masked-span sampler.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::config::{MaskingConfig, REPLACEMENT_RATE_EPSILON};
use super::error::{MaskingError, Result};
use super::plan::{MaskPlan, MaskedSequence};
use crate::tokenizer::{TokenId, WordPieceTokenizer};
use crate::trace::{TraceStep, TRACER};

/// Selects positions to mask and records recovery labels.
///
/// The sampler holds no random state: every call takes a caller-owned RNG,
/// so one instance can serve many threads and results are reproducible for a
/// fixed seed.
#[derive(Debug, Clone)]
pub struct MaskedSpanSampler {
    config: MaskingConfig,
    vocabulary_size: usize,
    mask_token_id: TokenId,
    unselectable: HashSet<TokenId>,
}

impl MaskedSpanSampler {
    /// Create a sampler.
    ///
    /// `pad_token_id` is always unselectable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the selection rate is outside (0, 1], the
    /// selection length is zero, a token id is outside the vocabulary, or the
    /// replacement rates are not probabilities summing to at most 1.
    pub fn new(
        config: MaskingConfig,
        vocabulary_size: usize,
        mask_token_id: TokenId,
        pad_token_id: TokenId,
    ) -> Result<Self> {
        let rate = config.mask_selection_rate;
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(MaskingError::ConfigError(format!(
                "mask_selection_rate must be in (0, 1], got {rate}"
            )));
        }
        if config.mask_selection_length == 0 {
            return Err(MaskingError::ConfigError(
                "mask_selection_length must be greater than zero".to_string(),
            ));
        }
        if vocabulary_size == 0 {
            return Err(MaskingError::ConfigError(
                "vocabulary_size must be greater than zero".to_string(),
            ));
        }
        for (name, id) in [("mask_token_id", mask_token_id), ("pad_token_id", pad_token_id)] {
            if id as usize >= vocabulary_size {
                return Err(MaskingError::ConfigError(format!(
                    "{name} {id} is outside the vocabulary (size {vocabulary_size})"
                )));
            }
        }
        for (name, value) in [
            ("mask_token_rate", config.mask_token_rate),
            ("random_token_rate", config.random_token_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MaskingError::ConfigError(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if config.mask_token_rate + config.random_token_rate > 1.0 + REPLACEMENT_RATE_EPSILON {
            return Err(MaskingError::ConfigError(format!(
                "mask_token_rate + random_token_rate must not exceed 1, got {}",
                config.mask_token_rate + config.random_token_rate
            )));
        }

        let mut unselectable: HashSet<TokenId> =
            config.unselectable_token_ids.iter().copied().collect();
        unselectable.insert(pad_token_id);

        Ok(Self {
            config,
            vocabulary_size,
            mask_token_id,
            unselectable,
        })
    }

    /// Create a sampler using the tokenizer's vocabulary size, mask id and pad id.
    pub fn for_tokenizer(tokenizer: &WordPieceTokenizer, config: MaskingConfig) -> Result<Self> {
        Self::new(
            config,
            tokenizer.vocabulary().len(),
            tokenizer.mask_id(),
            tokenizer.pad_id(),
        )
    }

    /// Sampler configuration
    pub fn config(&self) -> &MaskingConfig {
        &self.config
    }

    /// Fixed length of every produced [`MaskPlan`]
    pub fn mask_selection_length(&self) -> usize {
        self.config.mask_selection_length
    }

    /// Mask token id
    pub fn mask_token_id(&self) -> TokenId {
        self.mask_token_id
    }

    /// Whether `id` may be selected
    pub fn is_selectable(&self, id: TokenId) -> bool {
        !self.unselectable.contains(&id)
    }

    /// Number of positions that will be selected out of `eligible`.
    ///
    /// `round` is half away from zero; the cap then bounds the result.
    pub fn target_count(&self, eligible: usize) -> usize {
        let by_rate = (self.config.mask_selection_rate * eligible as f64).round() as usize;
        by_rate.min(self.config.mask_selection_length).min(eligible)
    }

    /// Mask `token_ids` using the supplied RNG.
    pub fn mask<R: Rng + ?Sized>(&self, token_ids: &[TokenId], rng: &mut R) -> MaskedSequence {
        TRACER.span(TraceStep::Sample, || self.mask_inner(token_ids, rng))
    }

    /// Mask `token_ids` with a fresh generator seeded from `seed`.
    pub fn mask_with_seed(&self, token_ids: &[TokenId], seed: u64) -> MaskedSequence {
        let mut rng = StdRng::seed_from_u64(seed);
        self.mask(token_ids, &mut rng)
    }

    fn mask_inner<R: Rng + ?Sized>(&self, token_ids: &[TokenId], rng: &mut R) -> MaskedSequence {
        let eligible: Vec<usize> = token_ids
            .iter()
            .enumerate()
            .filter(|&(_, &id)| self.is_selectable(id))
            .map(|(position, _)| position)
            .collect();

        let target = self.target_count(eligible.len());

        let mut positions: Vec<usize> = if target == 0 {
            Vec::new()
        } else {
            index::sample(rng, eligible.len(), target)
                .into_iter()
                .map(|i| eligible[i])
                .collect()
        };
        positions.sort_unstable();

        let mut masked = token_ids.to_vec();
        let mut selected = Vec::with_capacity(positions.len());
        for position in positions {
            let original = token_ids[position];
            selected.push((position, original));
            masked[position] = self.replacement(original, rng);
        }

        MaskedSequence {
            token_ids: masked,
            plan: MaskPlan::from_selected(&selected, self.config.mask_selection_length),
        }
    }

    /// Pick the id placed at a selected position.
    fn replacement<R: Rng + ?Sized>(&self, original: TokenId, rng: &mut R) -> TokenId {
        if self.config.mask_token_rate >= 1.0 {
            return self.mask_token_id;
        }
        let draw: f32 = rng.random();
        if draw < self.config.mask_token_rate {
            self.mask_token_id
        } else if draw < self.config.mask_token_rate + self.config.random_token_rate {
            rng.random_range(0..self.vocabulary_size) as TokenId
        } else {
            original
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn sequence_strategy() -> impl Strategy<Value = Vec<TokenId>> {
        prop::collection::vec(prop_oneof![Just(0u32), 3u32..50], 0..80)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_plan_shape(
            input in sequence_strategy(),
            rate in 0.01f64..=1.0,
            length in 1usize..40,
            seed in any::<u64>(),
        ) {
            let s = MaskedSpanSampler::new(MaskingConfig::new(rate, length), 50, 2, 0).unwrap();
            let out = s.mask_with_seed(&input, seed);
            prop_assert_eq!(out.plan.positions.len(), length);
            prop_assert_eq!(out.plan.original_ids.len(), length);
            prop_assert_eq!(out.plan.weights.len(), length);
            prop_assert_eq!(out.token_ids.len(), input.len());
        }

        #[test]
        fn prop_positions_ascending_and_not_padding(
            input in sequence_strategy(),
            rate in 0.01f64..=1.0,
            length in 1usize..40,
            seed in any::<u64>(),
        ) {
            let s = MaskedSpanSampler::new(MaskingConfig::new(rate, length), 50, 2, 0).unwrap();
            let out = s.mask_with_seed(&input, seed);
            let real: Vec<usize> = out.plan.masked().map(|(p, _)| p).collect();
            prop_assert!(real.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(real.iter().all(|&p| input[p] != 0));
            prop_assert!(out.plan.weights[real.len()..].iter().all(|&w| w == 0.0));
        }

        #[test]
        fn prop_count_matches_target(
            input in sequence_strategy(),
            rate in 0.01f64..=1.0,
            length in 1usize..40,
            seed in any::<u64>(),
        ) {
            let s = MaskedSpanSampler::new(MaskingConfig::new(rate, length), 50, 2, 0).unwrap();
            let eligible = input.iter().filter(|&&id| id != 0).count();
            let out = s.mask_with_seed(&input, seed);
            prop_assert_eq!(out.plan.num_masked(), s.target_count(eligible));
            prop_assert!(out.plan.num_masked() <= length.min(eligible));
        }

        #[test]
        fn prop_deterministic_for_seed(input in sequence_strategy(), seed in any::<u64>()) {
            let s = MaskedSpanSampler::new(MaskingConfig::bert(0.25, 16), 50, 2, 0).unwrap();
            prop_assert_eq!(s.mask_with_seed(&input, seed), s.mask_with_seed(&input, seed));
        }
    }
}
