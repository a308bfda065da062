//! YAML schema for declarative data preparation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::masking::{DEFAULT_MASK_SELECTION_LENGTH, DEFAULT_MASK_SELECTION_RATE};
use crate::tokenizer::WordPieceConfig;

/// Complete preparation specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Vocabulary and tokenizer options
    pub tokenizer: TokenizerSpec,

    /// Masked-span sampling options
    #[serde(default)]
    pub masking: MaskingSpec,

    /// Pretraining corpus and output
    pub data: DataSpec,

    /// Optional classification fine-tuning corpus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finetune: Option<FinetuneSpec>,

    /// Base seed for masking
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Tokenizer section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerSpec {
    /// Vocabulary file, one entry per line
    pub vocab: PathBuf,

    #[serde(flatten)]
    pub options: WordPieceConfig,
}

/// Masking section
///
/// Unselectable tokens are given as vocabulary strings and resolved to ids
/// when the pipeline is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingSpec {
    pub mask_selection_rate: f64,
    pub mask_selection_length: usize,
    pub mask_token_rate: f32,
    pub random_token_rate: f32,
    pub unselectable_tokens: Vec<String>,
}

impl Default for MaskingSpec {
    fn default() -> Self {
        Self {
            mask_selection_rate: DEFAULT_MASK_SELECTION_RATE,
            mask_selection_length: DEFAULT_MASK_SELECTION_LENGTH,
            mask_token_rate: 1.0,
            random_token_rate: 0.0,
            unselectable_tokens: Vec::new(),
        }
    }
}

/// Pretraining data section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSpec {
    /// Raw text corpus, one example per line
    pub train: PathBuf,

    /// JSONL output for training records
    #[serde(default = "default_pretrain_output")]
    pub output: PathBuf,

    /// Lines shorter than this (after trimming) are skipped
    #[serde(default = "default_min_line_chars")]
    pub min_line_chars: usize,
}

/// Fine-tuning data section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinetuneSpec {
    /// `sentence<TAB>label` corpus
    pub train: PathBuf,

    /// JSONL output for classification records
    #[serde(default = "default_finetune_output")]
    pub output: PathBuf,

    #[serde(default = "default_num_classes")]
    pub num_classes: usize,
}

fn default_seed() -> u64 {
    42
}

fn default_pretrain_output() -> PathBuf {
    PathBuf::from("pretrain.jsonl")
}

fn default_finetune_output() -> PathBuf {
    PathBuf::from("finetune.jsonl")
}

fn default_min_line_chars() -> usize {
    100
}

fn default_num_classes() -> usize {
    2
}

impl PipelineSpec {
    /// Resolve every relative path against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        resolve(&mut self.tokenizer.vocab);
        resolve(&mut self.data.train);
        resolve(&mut self.data.output);
        if let Some(finetune) = &mut self.finetune {
            resolve(&mut finetune.train);
            resolve(&mut finetune.output);
        }
    }
}
