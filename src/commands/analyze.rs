//! Root word analysis command
//!
//! Finds every dictionary word that would be accepted as the first answer of
//! a fresh round.

use crate::core::{NormalizedWord, RootWord, RoundState};
use crate::validator::{Dictionary, WordValidator};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root_word: String,
    /// Accepted answers, longest first, then alphabetical
    pub answers: Vec<String>,
    /// Number of answers for each word length
    pub by_length: BTreeMap<usize, usize>,
    pub vocabulary_size: usize,
}

impl AnalysisResult {
    /// Number of answers found
    #[must_use]
    pub fn total(&self) -> usize {
        self.answers.len()
    }

    /// Length of the longest answer, 0 if there are none
    #[must_use]
    pub fn longest(&self) -> usize {
        self.answers
            .first()
            .map_or(0, |word| word.chars().count())
    }
}

/// Analyze a root word against a vocabulary
///
/// Every word of `vocabulary` is run through the validator against an empty
/// round, in parallel.
///
/// # Examples
/// ```
/// use word_scramble::commands::analyze_root;
/// use word_scramble::validator::WordListDictionary;
///
/// let dictionary = WordListDictionary::new("en", ["tee", "rete", "eel", "tree"]);
/// let result = analyze_root("tree", dictionary.words(), &dictionary, "en");
/// assert_eq!(result.answers, vec!["rete", "tee"]);
/// ```
#[must_use]
pub fn analyze_root<D: Dictionary + Sync + ?Sized>(
    root_word: &str,
    vocabulary: &[String],
    dictionary: &D,
    language: &str,
) -> AnalysisResult {
    let round = RoundState::new(RootWord::new(root_word));
    let validator = WordValidator::new(dictionary, language);
    let max_len = round.root_word().chars().count();

    let mut answers: Vec<String> = vocabulary
        .par_iter()
        .filter(|word| word.chars().count() <= max_len)
        .filter_map(|word| NormalizedWord::from_input(word))
        .filter(|word| validator.check(&round, word).is_ok())
        .map(NormalizedWord::into_string)
        .collect();

    answers.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    answers.dedup();

    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    for word in &answers {
        *by_length.entry(word.chars().count()).or_insert(0) += 1;
    }

    AnalysisResult {
        root_word: round.root_word().to_string(),
        answers,
        by_length,
        vocabulary_size: vocabulary.len(),
    }
}
