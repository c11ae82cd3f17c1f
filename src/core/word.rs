//! Word representations
//!
//! `RootWord` is the fixed word a round is played against; `NormalizedWord` is
//! the canonical form of a player's submission.

use std::fmt;
use tracing::warn;

/// Root word used when no usable word is supplied for a round
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Lowercase and trim a raw string
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Worm\n"), "worm");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The word whose letters a round is played with
///
/// Always lowercase, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord(String);

impl RootWord {
    /// Create a root word, falling back to [`DEFAULT_ROOT_WORD`] when the
    /// normalized text is empty
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RootWord, DEFAULT_ROOT_WORD};
    ///
    /// assert_eq!(RootWord::new("  Tree ").as_str(), "tree");
    /// assert_eq!(RootWord::new("   ").as_str(), DEFAULT_ROOT_WORD);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text = normalize(text);
        if text.is_empty() {
            warn!(fallback = DEFAULT_ROOT_WORD, "empty root word, using fallback");
            return Self(DEFAULT_ROOT_WORD.to_string());
        }
        Self(text)
    }

    /// Get the root word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// True if the word has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RootWord {
    fn default() -> Self {
        Self(DEFAULT_ROOT_WORD.to_string())
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submission in canonical form: lowercased, trimmed, non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedWord(String);

impl NormalizedWord {
    /// Normalize raw player input
    ///
    /// Returns `None` when nothing remains after trimming; empty submissions
    /// are ignored rather than rejected.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::NormalizedWord;
    ///
    /// let word = NormalizedWord::from_input("  Worm  ").unwrap();
    /// assert_eq!(word.as_str(), "worm");
    ///
    /// assert!(NormalizedWord::from_input(" \t\n").is_none());
    /// ```
    #[must_use]
    pub fn from_input(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() { None } else { Some(Self(text)) }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// True if the word has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  WoRm  "), "worm");
        assert_eq!(normalize("\tsilk\r\n"), "silk");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" ice cream "), "ice cream");
    }

    #[test]
    fn root_word_normalized() {
        let root = RootWord::new("SilkWorm");
        assert_eq!(root.as_str(), "silkworm");
        assert_eq!(root.len(), 8);
    }

    #[test]
    fn root_word_empty_falls_back() {
        assert_eq!(RootWord::new("").as_str(), DEFAULT_ROOT_WORD);
        assert_eq!(RootWord::new(" \n ").as_str(), DEFAULT_ROOT_WORD);
        assert!(!RootWord::new("").is_empty());
    }

    #[test]
    fn root_word_default() {
        assert_eq!(RootWord::default().as_str(), "silkworm");
    }

    #[test]
    fn normalized_word_from_input() {
        let word = NormalizedWord::from_input("  Worm  ").unwrap();
        assert_eq!(word.as_str(), "worm");
        assert_eq!(word.len(), 4);
        assert_eq!(format!("{word}"), "worm");
    }

    #[test]
    fn normalized_word_empty_input() {
        assert!(NormalizedWord::from_input("").is_none());
        assert!(NormalizedWord::from_input("   ").is_none());
        assert!(NormalizedWord::from_input("\n\t").is_none());
    }

    #[test]
    fn normalized_word_counts_characters() {
        let word = NormalizedWord::from_input("Café").unwrap();
        assert_eq!(word.as_str(), "café");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn normalized_words_compare_after_normalizing() {
        let a = NormalizedWord::from_input("TREE").unwrap();
        let b = NormalizedWord::from_input(" tree ").unwrap();
        assert_eq!(a, b);
    }
}
