//! Masked-span sampler configuration.

use serde::{Deserialize, Serialize};

use crate::tokenizer::TokenId;

/// Default fraction of eligible positions selected for prediction.
pub const DEFAULT_MASK_SELECTION_RATE: f64 = 0.25;

/// Slack allowed when checking that replacement rates sum to at most 1.
pub const REPLACEMENT_RATE_EPSILON: f32 = 1e-6;

/// Default maximum number of predictions per sequence.
pub const DEFAULT_MASK_SELECTION_LENGTH: usize = 32;

/// Masking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingConfig {
    /// Fraction of eligible positions to select, in (0, 1]
    pub mask_selection_rate: f64,
    /// Maximum number of selected positions per sequence (max predictions)
    pub mask_selection_length: usize,
    /// Probability that a selected token is replaced by the mask token
    pub mask_token_rate: f32,
    /// Probability that a selected token is replaced by a random vocabulary id
    pub random_token_rate: f32,
    /// Ids never selected, in addition to the padding id
    pub unselectable_token_ids: Vec<TokenId>,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            mask_selection_rate: DEFAULT_MASK_SELECTION_RATE,
            mask_selection_length: DEFAULT_MASK_SELECTION_LENGTH,
            mask_token_rate: 1.0,
            random_token_rate: 0.0,
            unselectable_token_ids: Vec::new(),
        }
    }
}

impl MaskingConfig {
    /// Create a config with the given selection rate and cap
    pub fn new(mask_selection_rate: f64, mask_selection_length: usize) -> Self {
        Self {
            mask_selection_rate,
            mask_selection_length,
            ..Default::default()
        }
    }

    /// BERT-style replacement: 80% mask token, 10% random token, 10% unchanged
    pub fn bert(mask_selection_rate: f64, mask_selection_length: usize) -> Self {
        Self::new(mask_selection_rate, mask_selection_length).with_replacement_rates(0.8, 0.1)
    }

    /// Set mask/random replacement probabilities
    pub fn with_replacement_rates(mut self, mask_token_rate: f32, random_token_rate: f32) -> Self {
        self.mask_token_rate = mask_token_rate;
        self.random_token_rate = random_token_rate;
        self
    }

    /// Exclude additional ids from selection
    pub fn with_unselectable(mut self, ids: impl IntoIterator<Item = TokenId>) -> Self {
        self.unselectable_token_ids.extend(ids);
        self
    }

    /// Probability that a selected token keeps its original id
    pub fn keep_token_rate(&self) -> f32 {
        (1.0 - self.mask_token_rate - self.random_token_rate).max(0.0)
    }
}
