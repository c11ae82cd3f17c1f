//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{DICTIONARY, START_WORDS};
use crate::core::normalize;
use crate::validator::WordListDictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Error type for word list loading
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// The list compiled into the binary
    Embedded,
    /// A text file with one word per line
    File(PathBuf),
}

impl WordListSource {
    /// Parse a command-line value: `embedded` or a file path
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "embedded" | "builtin" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Load words from a file
///
/// Words are trimmed and lowercased; blank lines and lines starting with `#`
/// are skipped.
///
/// # Errors
///
/// Returns `WordListError::Read` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = parse_lines(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|&word| normalize(word))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load the root words for new rounds
///
/// An empty list is not an error: rounds then use the default root word.
///
/// # Errors
///
/// Returns an error if a file source cannot be read.
pub fn load_start_words(source: &WordListSource) -> Result<Vec<String>, WordListError> {
    let words = match source {
        WordListSource::Embedded => words_from_slice(START_WORDS),
        WordListSource::File(path) => load_from_file(path)?,
    };

    if words.is_empty() {
        warn!("start word list is empty, every round will use the default root word");
    } else {
        info!(count = words.len(), "start words loaded");
    }
    Ok(words)
}

/// Load the dictionary used by the reality check
///
/// # Errors
///
/// Returns an error if a file source cannot be read.
pub fn load_dictionary(
    source: &WordListSource,
    language: &str,
) -> Result<WordListDictionary, WordListError> {
    let dictionary = match source {
        WordListSource::Embedded => WordListDictionary::new(language, DICTIONARY),
        WordListSource::File(path) => WordListDictionary::new(language, load_from_file(path)?),
    };

    if dictionary.is_empty() {
        warn!(language, "dictionary is empty, no word will pass the reality check");
    } else {
        info!(language, count = dictionary.len(), "dictionary loaded");
    }
    Ok(dictionary)
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(normalize)
        .collect()
}
