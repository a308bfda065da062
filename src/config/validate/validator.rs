//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::PipelineSpec;
use crate::masking::REPLACEMENT_RATE_EPSILON;

/// Validate a preparation specification
///
/// Checks numeric ranges and non-empty strings. File existence is checked
/// separately by [`validate_paths`].
pub fn validate_config(spec: &PipelineSpec) -> Result<(), ValidationError> {
    let tokenizer = &spec.tokenizer.options;

    if tokenizer.sequence_length == 0 {
        return Err(ValidationError::InvalidSeqLen(tokenizer.sequence_length));
    }

    if tokenizer.suffix_indicator.is_empty() {
        return Err(ValidationError::EmptySuffixIndicator);
    }

    if tokenizer.max_input_chars_per_word == 0 {
        return Err(ValidationError::InvalidMaxInputChars(
            tokenizer.max_input_chars_per_word,
        ));
    }

    let special = &tokenizer.special_tokens;
    for (role, token) in [("unk", &special.unk), ("pad", &special.pad), ("mask", &special.mask)] {
        if token.is_empty() {
            return Err(ValidationError::EmptySpecialToken(role));
        }
    }

    let masking = &spec.masking;
    let rate = masking.mask_selection_rate;
    if !(rate > 0.0 && rate <= 1.0) {
        return Err(ValidationError::InvalidMaskRate(rate));
    }

    if masking.mask_selection_length == 0 {
        return Err(ValidationError::InvalidMaskLength(masking.mask_selection_length));
    }

    let (mask, random) = (masking.mask_token_rate, masking.random_token_rate);
    let in_unit = |r: f32| (0.0..=1.0).contains(&r);
    if !in_unit(mask) || !in_unit(random) || mask + random > 1.0 + REPLACEMENT_RATE_EPSILON {
        return Err(ValidationError::InvalidReplacementRates { mask, random });
    }

    if let Some(finetune) = &spec.finetune {
        if finetune.num_classes < 2 {
            return Err(ValidationError::InvalidNumClasses(finetune.num_classes));
        }
    }

    Ok(())
}

/// Check that every input file named by the spec exists.
pub fn validate_paths(spec: &PipelineSpec) -> Result<(), ValidationError> {
    if !spec.tokenizer.vocab.exists() {
        return Err(ValidationError::VocabNotFound(
            spec.tokenizer.vocab.display().to_string(),
        ));
    }

    if !spec.data.train.exists() {
        return Err(ValidationError::TrainDataNotFound(
            spec.data.train.display().to_string(),
        ));
    }

    if let Some(finetune) = &spec.finetune {
        if !finetune.train.exists() {
            return Err(ValidationError::FinetuneDataNotFound(
                finetune.train.display().to_string(),
            ));
        }
    }

    Ok(())
}

/// Check the inputs of fine-tuning preparation: the vocabulary and the
/// labelled corpus. The pretraining corpus may be absent.
pub fn validate_finetune_paths(spec: &PipelineSpec) -> Result<(), ValidationError> {
    let finetune = spec
        .finetune
        .as_ref()
        .ok_or(ValidationError::MissingFinetuneSection)?;

    if !spec.tokenizer.vocab.exists() {
        return Err(ValidationError::VocabNotFound(
            spec.tokenizer.vocab.display().to_string(),
        ));
    }

    if !finetune.train.exists() {
        return Err(ValidationError::FinetuneDataNotFound(
            finetune.train.display().to_string(),
        ));
    }

    Ok(())
}
