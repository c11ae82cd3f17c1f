//! Submission validation pipeline

use super::Dictionary;
use super::checks::{is_original, is_possible, is_real};
use crate::core::{NormalizedWord, RejectionKind, RoundState};
use tracing::trace;

/// Runs the validation rules in a fixed order
///
/// The first failing rule decides the rejection: already used, then not
/// possible, then not real.
pub struct WordValidator<'d, D: Dictionary + ?Sized> {
    dictionary: &'d D,
    language: String,
}

impl<'d, D: Dictionary + ?Sized> WordValidator<'d, D> {
    /// Create a validator that checks spelling in `language`
    pub fn new(dictionary: &'d D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    /// Language passed to the dictionary
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The dictionary consulted by the reality check
    #[must_use]
    pub const fn dictionary(&self) -> &'d D {
        self.dictionary
    }

    /// Check `word` against the current round
    ///
    /// Doesn't modify the round.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionKind`] of the first rule the word breaks.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{NormalizedWord, RejectionKind, RootWord, RoundState};
    /// use word_scramble::validator::{WordListDictionary, WordValidator};
    ///
    /// let dictionary = WordListDictionary::new("en", ["tee", "eel"]);
    /// let validator = WordValidator::new(&dictionary, "en");
    /// let round = RoundState::new(RootWord::new("tree"));
    ///
    /// let tee = NormalizedWord::from_input("tee").unwrap();
    /// assert!(validator.check(&round, &tee).is_ok());
    ///
    /// let eel = NormalizedWord::from_input("eel").unwrap();
    /// assert_eq!(validator.check(&round, &eel), Err(RejectionKind::NotPossible));
    /// ```
    pub fn check(&self, round: &RoundState, word: &NormalizedWord) -> Result<(), RejectionKind> {
        let word = word.as_str();
        let root_word = round.root_word();

        if !is_original(round, word) {
            trace!(word, "rejected: already used");
            return Err(RejectionKind::AlreadyUsed);
        }

        if !is_possible(root_word, word) {
            trace!(word, root_word, "rejected: not possible");
            return Err(RejectionKind::NotPossible);
        }

        if !is_real(self.dictionary, &self.language, root_word, word) {
            trace!(word, language = %self.language, "rejected: not real");
            return Err(RejectionKind::NotReal);
        }

        Ok(())
    }
}
