//! Word checking command
//!
//! Plays a list of submissions against a given root word and records the
//! outcome of each one.

use crate::core::ValidationOutcome;
use crate::game::Game;
use crate::validator::Dictionary;

/// Configuration for a check run
pub struct CheckConfig {
    pub root_word: String,
    pub inputs: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root_word: String, inputs: Vec<String>) -> Self {
        Self { root_word, inputs }
    }
}

/// Result of a check run
pub struct CheckResult {
    pub root_word: String,
    pub steps: Vec<CheckStep>,
    pub used_words: Vec<String>,
}

/// A single submission and what happened to it
pub struct CheckStep {
    pub input: String,
    /// `None` when the input was empty and ignored
    pub outcome: Option<ValidationOutcome>,
}

impl CheckResult {
    /// Number of accepted submissions
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome.as_ref().is_some_and(ValidationOutcome::is_accepted))
            .count()
    }

    /// Number of rejected submissions
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome.as_ref().is_some_and(|o| !o.is_accepted()))
            .count()
    }
}

/// Submit every input in order within a single round
pub fn check_words<D: Dictionary + ?Sized>(
    config: CheckConfig,
    dictionary: &D,
    language: &str,
) -> CheckResult {
    let mut game = Game::new(dictionary, language, &config.root_word);

    let steps = config
        .inputs
        .into_iter()
        .map(|input| {
            let outcome = game.submit(&input);
            CheckStep { input, outcome }
        })
        .collect();

    CheckResult {
        root_word: game.root_word().to_string(),
        steps,
        used_words: game.used_words().to_vec(),
    }
}
