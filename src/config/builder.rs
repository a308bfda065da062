//! Build pipeline components from configuration

use super::schema::{MaskingSpec, PipelineSpec};
use crate::error::{Error, Result};
use crate::masking::MaskingConfig;
use crate::pipeline::{FinetuningPipeline, PretrainingPipeline};
use crate::tokenizer::WordPieceTokenizer;

/// Load the vocabulary and build the tokenizer
pub fn build_tokenizer(spec: &PipelineSpec) -> Result<WordPieceTokenizer> {
    let tokenizer =
        WordPieceTokenizer::from_vocab_file(&spec.tokenizer.vocab, spec.tokenizer.options.clone())?;
    Ok(tokenizer)
}

/// Resolve unselectable token strings against the tokenizer vocabulary
pub fn build_masking_config(
    spec: &MaskingSpec,
    tokenizer: &WordPieceTokenizer,
) -> Result<MaskingConfig> {
    let mut unselectable = Vec::with_capacity(spec.unselectable_tokens.len());
    for token in &spec.unselectable_tokens {
        let id = tokenizer.vocabulary().get(token).ok_or_else(|| {
            Error::ConfigError(format!("Unselectable token '{token}' is not in the vocabulary"))
        })?;
        unselectable.push(id);
    }

    Ok(MaskingConfig::new(spec.mask_selection_rate, spec.mask_selection_length)
        .with_replacement_rates(spec.mask_token_rate, spec.random_token_rate)
        .with_unselectable(unselectable))
}

/// Build the pretraining pipeline (tokenizer + sampler + seed)
pub fn build_pretraining_pipeline(spec: &PipelineSpec) -> Result<PretrainingPipeline> {
    let tokenizer = build_tokenizer(spec)?;
    let masking = build_masking_config(&spec.masking, &tokenizer)?;
    PretrainingPipeline::with_masking(tokenizer, masking, spec.seed)
}

/// Build the fine-tuning pipeline
pub fn build_finetuning_pipeline(spec: &PipelineSpec) -> Result<FinetuningPipeline> {
    Ok(FinetuningPipeline::new(build_tokenizer(spec)?))
}
