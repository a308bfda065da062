//! MaskedLM pretraining pipeline: tokenize, then mask.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::record::TrainingRecord;
use crate::masking::{MaskedSpanSampler, MaskingConfig};
use crate::tokenizer::{Tokenizer, WordPieceTokenizer};

/// Multiplier used to spread record indices across the seed space (2^64 / phi).
const INDEX_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Turns raw text into [`TrainingRecord`]s.
///
/// Each record draws from its own generator seeded by the pipeline seed and
/// the record index, so output does not depend on batch size or thread count.
#[derive(Debug, Clone)]
pub struct PretrainingPipeline {
    tokenizer: WordPieceTokenizer,
    sampler: MaskedSpanSampler,
    seed: u64,
}

impl PretrainingPipeline {
    pub fn new(tokenizer: WordPieceTokenizer, sampler: MaskedSpanSampler, seed: u64) -> Self {
        Self {
            tokenizer,
            sampler,
            seed,
        }
    }

    /// Build the sampler from the tokenizer's vocabulary and special tokens.
    pub fn with_masking(
        tokenizer: WordPieceTokenizer,
        config: MaskingConfig,
        seed: u64,
    ) -> crate::Result<Self> {
        let sampler = MaskedSpanSampler::for_tokenizer(&tokenizer, config)?;
        Ok(Self::new(tokenizer, sampler, seed))
    }

    pub fn tokenizer(&self) -> &WordPieceTokenizer {
        &self.tokenizer
    }

    pub fn sampler(&self) -> &MaskedSpanSampler {
        &self.sampler
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed for the record at `index`
    pub fn record_seed(&self, index: usize) -> u64 {
        self.seed ^ (index as u64).wrapping_add(1).wrapping_mul(INDEX_SEED_STRIDE)
    }

    /// Encode and mask one text.
    pub fn process(&self, text: &str, index: usize) -> TrainingRecord {
        let token_ids = self.tokenizer.encode(text);
        let mut rng = StdRng::seed_from_u64(self.record_seed(index));
        self.sampler.mask(&token_ids, &mut rng).into()
    }

    /// Process texts in parallel; record `i` corresponds to `texts[i]`.
    pub fn process_batch<S>(&self, texts: &[S]) -> Vec<TrainingRecord>
    where
        S: AsRef<str> + Sync,
    {
        self.process_batch_from(texts, 0)
    }

    /// Like [`process_batch`](Self::process_batch) with indices starting at `offset`.
    pub fn process_batch_from<S>(&self, texts: &[S], offset: usize) -> Vec<TrainingRecord>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .enumerate()
            .map(|(i, text)| self.process(text.as_ref(), offset + i))
            .collect()
    }
}
