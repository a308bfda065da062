//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Vocabulary file does not exist: {0}")]
    VocabNotFound(String),

    #[error("Training corpus does not exist: {0}")]
    TrainDataNotFound(String),

    #[error("Config has no 'finetune' section")]
    MissingFinetuneSection,

    #[error("Fine-tuning corpus does not exist: {0}")]
    FinetuneDataNotFound(String),

    #[error("Invalid sequence length: {0} (must be > 0)")]
    InvalidSeqLen(usize),

    #[error("Suffix indicator cannot be empty")]
    EmptySuffixIndicator,

    #[error("Invalid max input chars per word: {0} (must be > 0)")]
    InvalidMaxInputChars(usize),

    #[error("Special token '{0}' cannot be empty")]
    EmptySpecialToken(&'static str),

    #[error("Invalid mask selection rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidMaskRate(f64),

    #[error("Invalid mask selection length: {0} (must be > 0)")]
    InvalidMaskLength(usize),

    #[error("Invalid replacement rates: mask={mask}, random={random} (each in [0.0, 1.0], sum <= 1.0)")]
    InvalidReplacementRates { mask: f32, random: f32 },

    #[error("Invalid number of classes: {0} (must be >= 2)")]
    InvalidNumClasses(usize),
}
