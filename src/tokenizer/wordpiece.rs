//! WordPiece tokenizer implementation.
//!
//! Greedy longest-prefix segmentation against a fixed vocabulary. Fragments
//! that continue a word are looked up in their marked form
//! (`suffix_indicator + fragment`). A word with any unmatched remainder is
//! emitted as a single unknown token.

use rayon::prelude::*;

use super::config::WordPieceConfig;
use super::error::{Result, TokenizerError};
use super::normalizer::Normalizer;
use super::traits::{TokenId, Tokenizer};
use super::vocab::Vocabulary;
use crate::trace::{TraceStep, TRACER};

/// WordPiece tokenizer producing fixed-length id sequences.
#[derive(Debug, Clone)]
pub struct WordPieceTokenizer {
    config: WordPieceConfig,
    vocab: Vocabulary,
    normalizer: Normalizer,
    unk_id: TokenId,
    pad_id: TokenId,
    mask_id: TokenId,
}

impl WordPieceTokenizer {
    /// Create a tokenizer over `vocab`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `sequence_length` is zero, the suffix indicator
    /// is empty, or any reserved token is missing from the vocabulary.
    pub fn new(vocab: Vocabulary, config: WordPieceConfig) -> Result<Self> {
        if config.sequence_length == 0 {
            return Err(TokenizerError::ConfigError(
                "sequence_length must be greater than zero".to_string(),
            ));
        }
        if config.suffix_indicator.is_empty() {
            return Err(TokenizerError::ConfigError(
                "suffix_indicator must not be empty".to_string(),
            ));
        }
        if config.max_input_chars_per_word == 0 {
            return Err(TokenizerError::ConfigError(
                "max_input_chars_per_word must be greater than zero".to_string(),
            ));
        }

        let special = &config.special_tokens;
        let unk_id = vocab.require(&special.unk, "unknown")?;
        let pad_id = vocab.require(&special.pad, "padding")?;
        let mask_id = vocab.require(&special.mask, "mask")?;

        let normalizer = Normalizer::new(config.lowercase, config.strip_accents);

        Ok(Self {
            config,
            vocab,
            normalizer,
            unk_id,
            pad_id,
            mask_id,
        })
    }

    /// Build from an in-memory token list
    pub fn from_tokens<I, S>(tokens: I, config: WordPieceConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Vocabulary::from_tokens(tokens)?, config)
    }

    /// Load the vocabulary from a `vocab.txt` file
    pub fn from_vocab_file(path: impl AsRef<std::path::Path>, config: WordPieceConfig) -> Result<Self> {
        Self::new(Vocabulary::load(path)?, config)
    }

    /// Tokenizer configuration
    pub fn config(&self) -> &WordPieceConfig {
        &self.config
    }

    /// Underlying vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Fixed output length of [`Tokenizer::encode`]
    pub fn sequence_length(&self) -> usize {
        self.config.sequence_length
    }

    /// Unknown token id
    pub fn unk_id(&self) -> TokenId {
        self.unk_id
    }

    /// Padding token id
    pub fn pad_id(&self) -> TokenId {
        self.pad_id
    }

    /// Mask token id
    pub fn mask_id(&self) -> TokenId {
        self.mask_id
    }

    /// Segment text into ids without truncation or padding.
    pub fn encode_unpadded(&self, text: &str) -> Vec<TokenId> {
        let normalized = TRACER.span(TraceStep::Normalize, || self.normalizer.normalize(text));
        TRACER.span(TraceStep::Segment, || {
            let mut ids = Vec::new();
            for word in self.normalizer.pre_tokenize(&normalized) {
                self.segment_word(word, &mut ids);
            }
            ids
        })
    }

    /// Segment text into sub-word strings without truncation or padding.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.encode_unpadded(text)
            .into_iter()
            .filter_map(|id| self.vocab.token(id).map(str::to_string))
            .collect()
    }

    /// Encode many texts in parallel, preserving input order.
    pub fn encode_batch<S>(&self, texts: &[S]) -> Vec<Vec<TokenId>>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.encode(text.as_ref())).collect()
    }

    /// Truncate (drop trailing ids) or pad with the padding id.
    pub fn fit_to_length(&self, mut ids: Vec<TokenId>) -> Vec<TokenId> {
        ids.resize(self.config.sequence_length, self.pad_id);
        ids
    }

    /// Greedy longest-prefix segmentation of one word, appending to `out`.
    fn segment_word(&self, word: &str, out: &mut Vec<TokenId>) {
        let char_count = word.chars().count();
        if char_count > self.config.max_input_chars_per_word {
            out.push(self.unk_id);
            return;
        }

        // Candidate end offsets, longest first.
        let boundaries: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .skip(1)
            .chain(std::iter::once(word.len()))
            .collect();

        let mut pieces = Vec::new();
        let mut candidate = String::with_capacity(word.len() + self.config.suffix_indicator.len());
        let mut start = 0;

        while start < word.len() {
            let mut matched = None;
            for &end in boundaries.iter().rev().take_while(|&&end| end > start) {
                candidate.clear();
                if start > 0 {
                    candidate.push_str(&self.config.suffix_indicator);
                }
                candidate.push_str(&word[start..end]);
                if let Some(id) = self.vocab.get(&candidate) {
                    matched = Some((id, end));
                    break;
                }
            }

            match matched {
                Some((id, end)) => {
                    pieces.push(id);
                    start = end;
                }
                None => {
                    out.push(self.unk_id);
                    return;
                }
            }
        }

        out.extend(pieces);
    }
}

impl Tokenizer for WordPieceTokenizer {
    fn encode(&self, text: &str) -> Vec<TokenId> {
        self.fit_to_length(self.encode_unpadded(text))
    }

    fn decode(&self, ids: &[TokenId]) -> Result<String> {
        let indicator = self.config.suffix_indicator.as_str();
        let mut text = String::new();

        for &id in ids {
            let token = self.vocab.token(id).ok_or(TokenizerError::InvalidToken {
                id,
                vocab_size: self.vocab.len(),
            })?;
            if id == self.pad_id {
                continue;
            }
            match token.strip_prefix(indicator) {
                Some(rest) => text.push_str(rest),
                None => {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(token);
                }
            }
        }

        Ok(text)
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn id_to_token(&self, id: TokenId) -> Option<&str> {
        self.vocab.token(id)
    }

    fn token_to_id(&self, token: &str) -> Option<TokenId> {
        self.vocab.get(token)
    }
}
