//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable.

mod letters;
mod outcome;
mod round;
mod word;

pub use letters::LetterBag;
pub use outcome::{RejectionKind, ValidationOutcome};
pub use round::RoundState;
pub use word::{DEFAULT_ROOT_WORD, NormalizedWord, RootWord, normalize};
