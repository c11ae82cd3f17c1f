//! Submission outcomes
//!
//! Rejections are ordinary values reported back to the player, not errors.

use super::NormalizedWord;
use std::fmt;

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// The word was already accepted this round
    AlreadyUsed,
    /// The word needs letters the root word doesn't have
    NotPossible,
    /// Too short, the root word itself, or not in the dictionary
    NotReal,
}

impl RejectionKind {
    /// Short headline shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Explanation shown under the title
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RejectionKind;
    ///
    /// let message = RejectionKind::NotPossible.message("tree");
    /// assert!(message.contains("tree"));
    /// ```
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root_word}'"),
            // One message for three conditions: the caller can't tell which one fired.
            Self::NotReal => format!(
                "Words need at least three letters, can't be '{root_word}' itself, and must be spelled correctly"
            ),
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of running a submission through the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The word was added to the round
    Accepted(NormalizedWord),
    /// The word broke a rule; the round is unchanged
    Rejected(RejectionKind),
}

impl ValidationOutcome {
    /// True for `Accepted`
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionKind> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(kind) => Some(*kind),
        }
    }

    /// The accepted word, if any
    #[inline]
    #[must_use]
    pub const fn accepted(&self) -> Option<&NormalizedWord> {
        match self {
            Self::Accepted(word) => Some(word),
            Self::Rejected(_) => None,
        }
    }
}
