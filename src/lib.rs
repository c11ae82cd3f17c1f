//! Word Scramble
//!
//! A word game: given a root word, spell as many new words as possible from
//! its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RejectionKind, ValidationOutcome};
//! use word_scramble::game::Game;
//! use word_scramble::validator::WordListDictionary;
//!
//! let dictionary = WordListDictionary::new("en", ["tee", "rete", "eel"]);
//! let mut game = Game::new(&dictionary, "en", "tree");
//!
//! assert!(game.submit("tee").unwrap().is_accepted());
//! assert_eq!(
//!     game.submit("eel"),
//!     Some(ValidationOutcome::Rejected(RejectionKind::NotPossible))
//! );
//! assert_eq!(game.used_words(), &["tee"]);
//! ```

// Core domain types
pub mod core;

// Validation rules and the dictionary they consult
pub mod validator;

// Round controller and root word selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
