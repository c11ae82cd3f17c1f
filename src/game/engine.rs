//! Round controller
//!
//! Owns the state of the current round and runs submissions through the
//! validator.

use crate::core::{NormalizedWord, RootWord, RoundState, ValidationOutcome};
use crate::validator::{Dictionary, WordValidator};
use tracing::{debug, info};

/// A game in progress
///
/// Coordinates one [`RoundState`] and one [`WordValidator`].
pub struct Game<'d, D: Dictionary + ?Sized> {
    validator: WordValidator<'d, D>,
    round: RoundState,
}

impl<'d, D: Dictionary + ?Sized> Game<'d, D> {
    /// Create a game and start the first round with `root_word`
    ///
    /// # Parameters
    /// - `dictionary`: Spell-check oracle for the reality check
    /// - `language`: Language code passed to the dictionary
    /// - `root_word`: Root word of the first round
    pub fn new(dictionary: &'d D, language: impl Into<String>, root_word: &str) -> Self {
        let mut game = Self {
            validator: WordValidator::new(dictionary, language),
            round: RoundState::default(),
        };
        game.start_round(root_word);
        game
    }

    /// Start a new round, replacing the root word and clearing used words
    ///
    /// An empty root word is replaced by the default one.
    pub fn start_round(&mut self, root_word: &str) {
        self.round.start_round(RootWord::new(root_word));
        info!(root_word = self.round.root_word(), "round started");
    }

    /// Submit raw player input
    ///
    /// Returns `None` for empty or whitespace-only input, which is ignored.
    /// Otherwise the outcome is returned and, if accepted, the word is added
    /// to the front of the used words.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RejectionKind, ValidationOutcome};
    /// use word_scramble::game::Game;
    /// use word_scramble::validator::WordListDictionary;
    ///
    /// let dictionary = WordListDictionary::new("en", ["tee", "eel"]);
    /// let mut game = Game::new(&dictionary, "en", "tree");
    ///
    /// assert!(game.submit("Tee").unwrap().is_accepted());
    /// assert_eq!(game.used_words(), &["tee"]);
    /// assert_eq!(
    ///     game.submit("tee"),
    ///     Some(ValidationOutcome::Rejected(RejectionKind::AlreadyUsed))
    /// );
    /// assert_eq!(game.submit("   "), None);
    /// ```
    pub fn submit(&mut self, raw_input: &str) -> Option<ValidationOutcome> {
        let word = NormalizedWord::from_input(raw_input)?;

        let outcome = match self.validator.check(&self.round, &word) {
            Ok(()) => {
                self.round.record_accepted(word.clone());
                ValidationOutcome::Accepted(word)
            }
            Err(kind) => ValidationOutcome::Rejected(kind),
        };

        debug!(input = raw_input, ?outcome, "submission checked");
        Some(outcome)
    }

    /// Accepted words of the current round, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.round.used_words()
    }

    /// Root word of the current round
    #[must_use]
    pub fn root_word(&self) -> &str {
        self.round.root_word()
    }

    /// Read access to the whole round
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// The validator used for submissions
    #[must_use]
    pub const fn validator(&self) -> &WordValidator<'d, D> {
        &self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_ROOT_WORD, RejectionKind};
    use crate::validator::WordListDictionary;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            "en",
            [
                "tee", "tree", "rete", "eel", "it", "worm", "silk", "milk", "silkworm",
            ],
        )
    }

    fn rejected(kind: RejectionKind) -> Option<ValidationOutcome> {
        Some(ValidationOutcome::Rejected(kind))
    }

    #[test]
    fn end_to_end_round() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", "tree");

        let outcome = game.submit("tee").unwrap();
        assert_eq!(outcome.accepted().map(NormalizedWord::as_str), Some("tee"));
        assert_eq!(game.used_words(), &["tee"]);

        assert_eq!(game.submit("tee"), rejected(RejectionKind::AlreadyUsed));
        assert_eq!(game.submit("eel"), rejected(RejectionKind::NotPossible));
        assert_eq!(game.used_words(), &["tee"]);
    }

    #[test]
    fn multiset_law() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", "tree");

        assert!(game.submit("rete").unwrap().is_accepted());
        assert!(game.submit("tee").unwrap().is_accepted());
        assert_eq!(game.submit("eel"), rejected(RejectionKind::NotPossible));
    }

    #[test]
    fn root_word_and_short_words_are_not_real() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", "silkworm");

        assert_eq!(game.submit("silkworm"), rejected(RejectionKind::NotReal));
        assert_eq!(game.submit("SilkWorm"), rejected(RejectionKind::NotReal));
        assert_eq!(game.submit("it"), rejected(RejectionKind::NotPossible));

        let mut game = Game::new(&dictionary, "en", "kit");
        assert_eq!(game.submit("it"), rejected(RejectionKind::NotReal));
    }

    #[test]
    fn rejection_is_idempotent() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", "silkworm");

        for input in ["wrom", "eel", "silkworm"] {
            let first = game.submit(input);
            let second = game.submit(input);
            assert_eq!(first, second);
            assert!(game.used_words().is_empty());
        }
    }

    #[test]
    fn normalizes_before_checking() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", "silkworm");

        let outcome = game.submit("  Worm  ").unwrap();
        assert_eq!(outcome.accepted().map(NormalizedWord::as_str), Some("worm"));
        assert_eq!(game.submit("worm"), rejected(RejectionKind::AlreadyUsed));
        assert_eq!(game.submit("WORM\n"), rejected(RejectionKind::AlreadyUsed));
        assert_eq!(game.used_words(), &["worm"]);
    }

    #[test]
    fn empty_input_is_ignored() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", "silkworm");

        assert_eq!(game.submit(""), None);
        assert_eq!(game.submit("   "), None);
        assert_eq!(game.submit("\t\n"), None);
        assert!(game.used_words().is_empty());
    }

    #[test]
    fn used_words_most_recent_first() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", "silkworm");

        game.submit("silk");
        game.submit("worm");
        game.submit("milk");

        assert_eq!(game.used_words(), &["milk", "worm", "silk"]);
    }

    #[test]
    fn new_round_resets_used_words() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", "silkworm");
        assert!(game.submit("worm").unwrap().is_accepted());

        game.start_round("silkworm");
        assert!(game.used_words().is_empty());
        assert!(game.submit("worm").unwrap().is_accepted());

        game.start_round("tree");
        assert_eq!(game.root_word(), "tree");
        assert!(game.used_words().is_empty());
    }

    #[test]
    fn empty_root_word_falls_back() {
        let dictionary = dictionary();
        let game = Game::new(&dictionary, "en", "  ");
        assert_eq!(game.root_word(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn root_word_is_normalized() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "en", " TREE ");
        assert_eq!(game.root_word(), "tree");
        assert!(game.submit("tee").unwrap().is_accepted());
    }
}
