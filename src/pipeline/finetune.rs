//! Sentence classification fine-tuning pipeline.

use rayon::prelude::*;

use super::record::{ClassificationRecord, LabeledText};
use crate::tokenizer::{Tokenizer, WordPieceTokenizer};

/// Encodes labelled sentences without masking.
#[derive(Debug, Clone)]
pub struct FinetuningPipeline {
    tokenizer: WordPieceTokenizer,
}

impl FinetuningPipeline {
    pub fn new(tokenizer: WordPieceTokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &WordPieceTokenizer {
        &self.tokenizer
    }

    pub fn process(&self, example: &LabeledText) -> ClassificationRecord {
        ClassificationRecord {
            token_ids: self.tokenizer.encode(&example.sentence),
            label: example.label,
        }
    }

    /// Process examples in parallel, preserving order.
    pub fn process_batch(&self, examples: &[LabeledText]) -> Vec<ClassificationRecord> {
        examples.par_iter().map(|example| self.process(example)).collect()
    }
}
