//! Masking error types.

use thiserror::Error;

/// Masked-span sampler errors
#[derive(Debug, Error)]
pub enum MaskingError {
    /// Invalid construction parameters (rates, lengths, token ids).
    #[error("Invalid masking configuration: {0}")]
    ConfigError(String),
}

/// Result type for masking operations
pub type Result<T> = std::result::Result<T, MaskingError>;
