//! Crate-level error type.

use thiserror::Error;

use crate::config::ValidationError;
use crate::masking::MaskingError;
use crate::tokenizer::TokenizerError;

/// Result type alias for maskprep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the data-preparation pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error(transparent)]
    Masking(#[from] MaskingError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
