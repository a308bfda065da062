//! Sub-word Tokenization Module
//!
//! WordPiece tokenization for masked-language-model pretraining. Text is
//! normalized, split on whitespace and punctuation, segmented by greedy
//! longest-prefix matching against a fixed vocabulary, then truncated or
//! padded to a fixed sequence length.
//!
//! # Example
//!
//! ```
//! use maskprep::tokenizer::{Tokenizer, WordPieceConfig, WordPieceTokenizer};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let vocab = ["[PAD]", "[UNK]", "[MASK]", "un", "##able", "do"];
//!     let tokenizer = WordPieceTokenizer::from_tokens(vocab, WordPieceConfig::new(5))?;
//!
//!     let ids = tokenizer.encode("doable");
//!     assert_eq!(ids, vec![5, 4, 0, 0, 0]);
//!     assert_eq!(tokenizer.decode(&ids)?, "doable");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

mod config;
mod error;
mod normalizer;
mod traits;
mod vocab;
mod wordpiece;

pub use config::{
    SpecialTokens, WordPieceConfig, DEFAULT_MAX_INPUT_CHARS_PER_WORD, DEFAULT_SEQUENCE_LENGTH,
    DEFAULT_SUFFIX_INDICATOR,
};
pub use error::{Result, TokenizerError};
pub use normalizer::{is_punctuation, Normalizer};
pub use traits::{TokenId, Tokenizer};
pub use vocab::Vocabulary;
pub use wordpiece::WordPieceTokenizer;
