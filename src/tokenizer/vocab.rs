//! Ordered, immutable WordPiece vocabulary.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use super::error::{Result, TokenizerError};
use super::traits::TokenId;

/// Ordered sequence of distinct sub-word strings.
///
/// The id of an entry is its position in the list. Construction rejects
/// duplicates, so exact-string lookup is unambiguous.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, TokenId>,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered list of entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the list is empty, contains duplicates, or
    /// does not fit in the `TokenId` range.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(TokenizerError::ConfigError("vocabulary is empty".to_string()));
        }
        if tokens.len() > TokenId::MAX as usize {
            return Err(TokenizerError::ConfigError(format!(
                "vocabulary has {} entries, more than the token id range allows",
                tokens.len()
            )));
        }

        let mut index = HashMap::with_capacity(tokens.len());
        for (id, token) in tokens.iter().enumerate() {
            if let Some(first) = index.insert(token.clone(), id as TokenId) {
                return Err(TokenizerError::ConfigError(format!(
                    "duplicate vocabulary entry '{token}' at indices {first} and {id}"
                )));
            }
        }

        Ok(Self { tokens, index })
    }

    /// Read a `vocab.txt`-style listing: one entry per line, order defines ids.
    ///
    /// A trailing `\r` is stripped from each line; no other trimming is done
    /// because whitespace-only entries are legal sub-words in some vocabularies.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            tokens.push(line.to_string());
        }
        // A trailing newline at end of file must not produce an empty entry.
        while tokens.last().is_some_and(String::is_empty) {
            tokens.pop();
        }
        Self::from_tokens(tokens)
    }

    /// Load a vocabulary file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a constructed vocabulary
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up an entry by exact string
    pub fn get(&self, token: &str) -> Option<TokenId> {
        self.index.get(token).copied()
    }

    /// Look up the string for an id
    pub fn token(&self, id: TokenId) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Resolve a reserved entry, failing with `ConfigError` if absent.
    pub fn require(&self, token: &str, role: &str) -> Result<TokenId> {
        self.get(token).ok_or_else(|| {
            TokenizerError::ConfigError(format!(
                "reserved {role} token '{token}' is not in the vocabulary"
            ))
        })
    }

    /// Entries in id order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_vocab_ids_follow_order() {
        let vocab = Vocabulary::from_tokens(["[PAD]", "[UNK]", "do"]).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get("[PAD]"), Some(0));
        assert_eq!(vocab.get("do"), Some(2));
        assert_eq!(vocab.token(1), Some("[UNK]"));
        assert_eq!(vocab.token(3), None);
    }

    #[test]
    fn test_vocab_rejects_empty() {
        let result = Vocabulary::from_tokens(Vec::<String>::new());
        assert!(matches!(result, Err(TokenizerError::ConfigError(_))));
    }

    #[test]
    fn test_vocab_rejects_duplicates() {
        let err = Vocabulary::from_tokens(["a", "b", "a"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("duplicate"));
        assert!(msg.contains("'a'"));
    }

    #[test]
    fn test_vocab_from_reader_strips_crlf_and_trailing_blank() {
        let text = "[PAD]\r\n[UNK]\r\nhello\n\n";
        let vocab = Vocabulary::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(vocab.tokens(), &["[PAD]", "[UNK]", "hello"]);
    }

    #[test]
    fn test_vocab_require_missing() {
        let vocab = Vocabulary::from_tokens(["[PAD]"]).unwrap();
        let err = vocab.require("[MASK]", "mask").unwrap_err();
        assert!(err.to_string().contains("mask"));
        assert_eq!(vocab.require("[PAD]", "padding").unwrap(), 0);
    }

    #[test]
    fn test_vocab_load_missing_file() {
        let result = Vocabulary::load("/nonexistent/vocab.txt");
        assert!(matches!(result, Err(TokenizerError::Io(_))));
    }
}
