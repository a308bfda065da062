//! Tokenizer trait definition.

use super::error::Result;

/// Token ID type
pub type TokenId = u32;

/// Tokenizer over a fixed vocabulary.
///
/// Implementations are immutable after construction, so a single instance can
/// be shared across worker threads.
pub trait Tokenizer: Send + Sync {
    /// Encode text to a fixed-length sequence of token IDs.
    ///
    /// Never fails: out-of-vocabulary words fall back to the unknown token.
    fn encode(&self, text: &str) -> Vec<TokenId>;

    /// Decode token IDs to text
    fn decode(&self, ids: &[TokenId]) -> Result<String>;

    /// Get vocabulary size
    fn vocab_size(&self) -> usize;

    /// Get token for ID
    fn id_to_token(&self, id: TokenId) -> Option<&str>;

    /// Get ID for token
    fn token_to_id(&self, token: &str) -> Option<TokenId>;
}
