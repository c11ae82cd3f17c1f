//! Dictionary lookup
//!
//! The reality check asks a [`Dictionary`] whether a word exists in a
//! language. Anything with a deterministic answer can stand in, which keeps
//! the validator testable without a system spell checker.

use crate::core::normalize;

/// Language code of the bundled dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// A spell-check oracle
pub trait Dictionary {
    /// Check whether `word` is a known, correctly spelled word in `language`
    ///
    /// Must answer the same way for the same word and language within a
    /// session.
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// Dictionary backed by a word list for a single language
///
/// Words are normalized, sorted and deduplicated on construction; lookups are
/// a binary search.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: Vec<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from any list of words
    ///
    /// Blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validator::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new("en", ["Tree", "tee", "rete"]);
    /// assert!(dictionary.is_known_word("tree", "en"));
    /// assert!(!dictionary.is_known_word("tree", "fr"));
    /// assert!(!dictionary.is_known_word("eel", "en"));
    /// ```
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Language this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// All words, sorted
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }
}

impl Dictionary for WordListDictionary {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.contains(word)
    }
}
