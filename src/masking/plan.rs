//! Mask plan: the supervision targets for one masked sequence.

use serde::{Deserialize, Serialize};

use crate::tokenizer::TokenId;

/// Positions, original ids and validity weights for one sequence.
///
/// All three vectors have length `mask_selection_length`. Real entries come
/// first in ascending position order with weight 1.0; filler entries
/// (position 0, id 0, weight 0.0) make up the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskPlan {
    /// Indices into the token sequence
    pub positions: Vec<usize>,
    /// Token ids at those positions before masking
    pub original_ids: Vec<TokenId>,
    /// 1.0 for real entries, 0.0 for filler
    pub weights: Vec<f32>,
}

impl MaskPlan {
    /// Build a plan from sorted `(position, original_id)` pairs, padding to `length`.
    pub(crate) fn from_selected(selected: &[(usize, TokenId)], length: usize) -> Self {
        debug_assert!(selected.len() <= length);
        let mut positions = Vec::with_capacity(length);
        let mut original_ids = Vec::with_capacity(length);
        let mut weights = Vec::with_capacity(length);

        for &(position, id) in selected {
            positions.push(position);
            original_ids.push(id);
            weights.push(1.0);
        }

        positions.resize(length, 0);
        original_ids.resize(length, 0);
        weights.resize(length, 0.0);

        Self {
            positions,
            original_ids,
            weights,
        }
    }

    /// Fixed plan length
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True only for a zero-length plan
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of real (weight 1.0) entries
    pub fn num_masked(&self) -> usize {
        self.weights.iter().take_while(|&&w| w > 0.0).count()
    }

    /// Iterate real `(position, original_id)` entries
    pub fn masked(&self) -> impl Iterator<Item = (usize, TokenId)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.original_ids.iter().copied())
            .take(self.num_masked())
    }
}

/// Token sequence after masking together with its plan.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedSequence {
    /// Input sequence with selected positions replaced
    pub token_ids: Vec<TokenId>,
    /// Supervision targets
    pub plan: MaskPlan,
}
