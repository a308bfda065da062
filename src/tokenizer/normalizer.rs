//! Text normalization and whitespace/punctuation pre-tokenization.

use std::ops::RangeInclusive;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Non-ASCII punctuation blocks treated as word boundaries.
const PUNCTUATION_RANGES: &[RangeInclusive<u32>] = &[
    0x00A1..=0x00A1, // ¡
    0x00A7..=0x00A7, // §
    0x00AB..=0x00AB, // «
    0x00B6..=0x00B7, // ¶ ·
    0x00BB..=0x00BB, // »
    0x00BF..=0x00BF, // ¿
    0x2010..=0x2027, // dashes, quotes, bullets
    0x2030..=0x205E, // per mille .. vertical four dots
    0x2E00..=0x2E7F, // Supplemental Punctuation
    0x3001..=0x3003, // 、 。 〃
    0x3008..=0x3011, // CJK brackets
    0x3014..=0x301F,
    0xFF01..=0xFF0F, // fullwidth ASCII punctuation
    0xFF1A..=0xFF20,
    0xFF3B..=0xFF40,
    0xFF5B..=0xFF65,
];

/// Returns true if `c` splits words and forms a word of its own.
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii_punctuation() {
        return true;
    }
    let code = c as u32;
    PUNCTUATION_RANGES.iter().any(|range| range.contains(&code))
}

/// Characters dropped before segmentation.
fn is_control(c: char) -> bool {
    if c == '\t' || c == '\n' || c == '\r' {
        return false;
    }
    c == '\u{0}' || c == '\u{FFFD}' || c.is_control()
}

/// Applies the optional case folding and accent stripping, then splits text
/// into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    lowercase: bool,
    strip_accents: bool,
}

impl Normalizer {
    /// Create a normalizer
    pub fn new(lowercase: bool, strip_accents: bool) -> Self {
        Self {
            lowercase,
            strip_accents,
        }
    }

    /// Normalize text: drop control characters, optionally lowercase, optionally
    /// strip diacritics.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned: String = text.chars().filter(|&c| !is_control(c)).collect();
        let cased = if self.lowercase {
            cleaned.to_lowercase()
        } else {
            cleaned
        };
        if self.strip_accents {
            cased.nfd().filter(|&c| !is_combining_mark(c)).collect()
        } else {
            cased
        }
    }

    /// Split normalized text on whitespace and punctuation.
    ///
    /// Whitespace runs are dropped; each punctuation character becomes its own
    /// word. Returned slices borrow from `text`.
    pub fn pre_tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut words = Vec::new();
        let mut start: Option<usize> = None;

        for (i, c) in text.char_indices() {
            if c.is_whitespace() || is_punctuation(c) {
                if let Some(s) = start.take() {
                    words.push(&text[s..i]);
                }
                if !c.is_whitespace() {
                    words.push(&text[i..i + c.len_utf8()]);
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }

        if let Some(s) = start {
            words.push(&text[s..]);
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercase_and_accents() {
        let norm = Normalizer::new(true, true);
        assert_eq!(norm.normalize("Héllo WÖRLD"), "hello world");
    }

    #[test]
    fn test_normalize_keeps_case_when_disabled() {
        let norm = Normalizer::new(false, false);
        assert_eq!(norm.normalize("Café"), "Café");
    }

    #[test]
    fn test_normalize_accents_only() {
        let norm = Normalizer::new(false, true);
        assert_eq!(norm.normalize("Naïve Café"), "Naive Cafe");
    }

    #[test]
    fn test_normalize_drops_control_chars() {
        let norm = Normalizer::new(false, false);
        assert_eq!(norm.normalize("a\u{0}b\u{7}c\td"), "abc\td");
    }

    #[test]
    fn test_pre_tokenize_whitespace() {
        let norm = Normalizer::new(true, true);
        assert_eq!(norm.pre_tokenize("  the   quick\tbrown\n"), vec!["the", "quick", "brown"]);
    }

    #[test]
    fn test_pre_tokenize_punctuation() {
        let norm = Normalizer::new(true, true);
        assert_eq!(
            norm.pre_tokenize("hello, world!"),
            vec!["hello", ",", "world", "!"]
        );
        assert_eq!(norm.pre_tokenize("don't"), vec!["don", "'", "t"]);
    }

    #[test]
    fn test_pre_tokenize_unicode_punctuation() {
        let norm = Normalizer::new(false, false);
        assert_eq!(norm.pre_tokenize("«oui»"), vec!["«", "oui", "»"]);
        assert_eq!(norm.pre_tokenize("a—b"), vec!["a", "—", "b"]);
    }

    #[test]
    fn test_pre_tokenize_empty() {
        let norm = Normalizer::new(true, true);
        assert!(norm.pre_tokenize("").is_empty());
        assert!(norm.pre_tokenize("   ").is_empty());
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation('.'));
        assert!(is_punctuation('$'));
        assert!(is_punctuation('¿'));
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation(' '));
        assert!(!is_punctuation('é'));
    }
}
