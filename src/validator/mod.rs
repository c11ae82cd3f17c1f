//! Submission validation
//!
//! The rules a candidate word must pass, the dictionary they consult, and the
//! pipeline that runs them in order.

mod checks;
pub mod dictionary;
mod pipeline;

pub use checks::{MIN_WORD_LENGTH, is_original, is_possible, is_real};
pub use dictionary::{DEFAULT_LANGUAGE, Dictionary, WordListDictionary};
pub use pipeline::WordValidator;
