//! Record types emitted by the pipelines.

use serde::{Deserialize, Serialize};

use crate::masking::MaskedSequence;
use crate::tokenizer::TokenId;

/// One MaskedLM pretraining example.
///
/// `token_ids` has the tokenizer's sequence length; the three mask vectors
/// have the sampler's selection length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub token_ids: Vec<TokenId>,
    pub mask_positions: Vec<usize>,
    pub mask_ids: Vec<TokenId>,
    pub mask_weights: Vec<f32>,
}

impl From<MaskedSequence> for TrainingRecord {
    fn from(masked: MaskedSequence) -> Self {
        Self {
            token_ids: masked.token_ids,
            mask_positions: masked.plan.positions,
            mask_ids: masked.plan.original_ids,
            mask_weights: masked.plan.weights,
        }
    }
}

impl TrainingRecord {
    /// Number of real prediction targets
    pub fn num_predictions(&self) -> usize {
        self.mask_weights.iter().take_while(|&&w| w > 0.0).count()
    }
}

/// A sentence paired with its class label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledText {
    pub sentence: String,
    pub label: usize,
}

impl LabeledText {
    pub fn new(sentence: impl Into<String>, label: usize) -> Self {
        Self {
            sentence: sentence.into(),
            label,
        }
    }
}

/// One classification fine-tuning example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub token_ids: Vec<TokenId>,
    pub label: usize,
}
