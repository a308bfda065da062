//! Tokenizer configuration types.

use serde::{Deserialize, Serialize};

/// Default WordPiece continuation marker.
pub const DEFAULT_SUFFIX_INDICATOR: &str = "##";

/// Words longer than this many characters map straight to the unknown token.
pub const DEFAULT_MAX_INPUT_CHARS_PER_WORD: usize = 100;

/// Default fixed sequence length.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 128;

/// Reserved vocabulary entries, resolved by exact string lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Unknown token
    pub unk: String,
    /// Padding token
    pub pad: String,
    /// Mask token (for MLM)
    pub mask: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            unk: "[UNK]".to_string(),
            pad: "[PAD]".to_string(),
            mask: "[MASK]".to_string(),
        }
    }
}

/// WordPiece tokenizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordPieceConfig {
    /// Every encoded sequence is truncated or padded to this length
    pub sequence_length: usize,
    /// Whether to lowercase input
    pub lowercase: bool,
    /// Whether to strip diacritics (NFD + drop combining marks)
    pub strip_accents: bool,
    /// Prefix marking a sub-word that continues a word
    pub suffix_indicator: String,
    /// Longer words are emitted as a single unknown token
    pub max_input_chars_per_word: usize,
    /// Special tokens
    pub special_tokens: SpecialTokens,
}

impl Default for WordPieceConfig {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            lowercase: true,
            strip_accents: true,
            suffix_indicator: DEFAULT_SUFFIX_INDICATOR.to_string(),
            max_input_chars_per_word: DEFAULT_MAX_INPUT_CHARS_PER_WORD,
            special_tokens: SpecialTokens::default(),
        }
    }
}

impl WordPieceConfig {
    /// Create a config with the given sequence length and default normalization
    pub fn new(sequence_length: usize) -> Self {
        Self {
            sequence_length,
            ..Default::default()
        }
    }

    /// Set sequence length
    pub fn with_sequence_length(mut self, sequence_length: usize) -> Self {
        self.sequence_length = sequence_length;
        self
    }

    /// Enable lowercase preprocessing
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Enable accent stripping
    pub fn with_strip_accents(mut self, strip_accents: bool) -> Self {
        self.strip_accents = strip_accents;
        self
    }

    /// Set the continuation marker
    pub fn with_suffix_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.suffix_indicator = indicator.into();
        self
    }

    /// Set the per-word character limit
    pub fn with_max_input_chars_per_word(mut self, max_chars: usize) -> Self {
        self.max_input_chars_per_word = max_chars;
        self
    }

    /// Replace the reserved token strings
    pub fn with_special_tokens(mut self, special_tokens: SpecialTokens) -> Self {
        self.special_tokens = special_tokens;
        self
    }
}
