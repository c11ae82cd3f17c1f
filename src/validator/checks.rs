//! Individual validation rules
//!
//! Each rule is a pure predicate; [`super::WordValidator`] decides the order
//! they run in.

use super::Dictionary;
use crate::core::{LetterBag, RoundState};

/// Shortest word the reality check accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// The word hasn't been accepted yet this round
#[must_use]
pub fn is_original(round: &RoundState, word: &str) -> bool {
    !round.contains(word)
}

/// The word can be spelled from the root word's letters
///
/// Each letter of the root word can be used once per occurrence.
///
/// # Examples
/// ```
/// use word_scramble::validator::is_possible;
///
/// assert!(is_possible("tree", "tee"));
/// assert!(is_possible("tree", "rete"));
/// assert!(!is_possible("tree", "eel"));
/// ```
#[must_use]
pub fn is_possible(root_word: &str, word: &str) -> bool {
    LetterBag::from_word(root_word).can_spell(word)
}

/// The word is long enough, isn't the root word, and the dictionary knows it
///
/// The three conditions are reported together as one result.
#[must_use]
pub fn is_real<D: Dictionary + ?Sized>(
    dictionary: &D,
    language: &str,
    root_word: &str,
    word: &str,
) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
        && word != root_word
        && dictionary.is_known_word(word, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NormalizedWord, RootWord};
    use crate::validator::WordListDictionary;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new("en", ["it", "tee", "tree", "rete", "silkworm", "worm"])
    }

    #[test]
    fn original_until_recorded() {
        let mut round = RoundState::new(RootWord::new("tree"));
        assert!(is_original(&round, "tee"));

        round.record_accepted(NormalizedWord::from_input("tee").unwrap());
        assert!(!is_original(&round, "tee"));
        assert!(is_original(&round, "rete"));
    }

    #[test]
    fn possible_uses_letter_counts() {
        assert!(is_possible("tree", "tee"));
        assert!(is_possible("tree", "rete"));
        assert!(is_possible("tree", "tree"));
        assert!(!is_possible("tree", "eel"));
        assert!(!is_possible("tree", "teee"));
    }

    #[test]
    fn possible_is_case_sensitive_on_normalized_input() {
        // Both sides are lowercase by the time they get here
        assert!(!is_possible("tree", "TEE"));
    }

    #[test]
    fn real_requires_minimum_length() {
        let dictionary = dictionary();
        assert!(!is_real(&dictionary, "en", "silkworm", "it"));
        assert!(is_real(&dictionary, "en", "silkworm", "worm"));
    }

    #[test]
    fn real_rejects_root_word() {
        let dictionary = dictionary();
        assert!(dictionary.is_known_word("silkworm", "en"));
        assert!(!is_real(&dictionary, "en", "silkworm", "silkworm"));
    }

    #[test]
    fn real_consults_dictionary() {
        let dictionary = dictionary();
        assert!(is_real(&dictionary, "en", "tree", "tee"));
        assert!(!is_real(&dictionary, "en", "tree", "ret"));
        assert!(!is_real(&dictionary, "fr", "tree", "tee"));
    }

    #[test]
    fn real_counts_characters_not_bytes() {
        let dictionary = WordListDictionary::new("fr", ["été"]);
        assert!(is_real(&dictionary, "fr", "tête", "été"));
    }
}
