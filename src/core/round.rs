//! Round state
//!
//! Holds the root word and the words accepted so far. The list is only ever
//! grown through [`RoundState::record_accepted`], after a submission passed
//! validation.

use super::{NormalizedWord, RootWord};

/// State of a single round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    root_word: RootWord,
    used_words: Vec<String>,
}

impl RoundState {
    /// Start a round for `root_word` with no used words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RootWord, RoundState};
    ///
    /// let round = RoundState::new(RootWord::new("tree"));
    /// assert_eq!(round.root_word(), "tree");
    /// assert!(round.used_words().is_empty());
    /// ```
    #[must_use]
    pub const fn new(root_word: RootWord) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
        }
    }

    /// Replace the root word and clear the used words
    pub fn start_round(&mut self, root_word: RootWord) {
        self.root_word = root_word;
        self.used_words.clear();
    }

    /// Insert an accepted word at the front of the used words
    ///
    /// The caller must have validated `word` against this round.
    pub fn record_accepted(&mut self, word: NormalizedWord) {
        debug_assert!(!self.contains(word.as_str()), "word recorded twice");
        self.used_words.insert(0, word.into_string());
    }

    /// Check whether `word` was already accepted this round
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Root word of this round
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        self.root_word.as_str()
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.used_words.len()
    }

    /// True if no word has been accepted yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used_words.is_empty()
    }
}
