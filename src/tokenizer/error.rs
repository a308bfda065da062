//! Tokenizer error types.

use thiserror::Error;

use super::traits::TokenId;

/// Tokenizer errors
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// Invalid construction parameters (vocabulary problems, missing reserved tokens).
    #[error("Invalid tokenizer configuration: {0}")]
    ConfigError(String),

    /// A token id outside `[0, vocab_size)` was passed to `decode`.
    #[error("Invalid token ID: {id} (vocabulary size {vocab_size})")]
    InvalidToken { id: TokenId, vocab_size: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;
