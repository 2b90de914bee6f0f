//! Hangman Solver
//!
//! Picks the next letter to guess in a game of hangman using nothing but a
//! training word list: candidate narrowing, letter presence ranking, a
//! substring fallback chain and common-letter suppression.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::Pattern;
//! use hangman_solver::solver::{EngineConfig, GuessEngine};
//! use hangman_solver::wordlists::{TrainingData, loader::words_from_slice};
//!
//! // Build the shared training data once
//! let data = TrainingData::from_words(words_from_slice(&["apple", "apply", "angle"]));
//!
//! // One engine per game
//! let mut engine = GuessEngine::new(&data, EngineConfig::default());
//! let letter = engine.next_guess(&Pattern::parse("_____").unwrap()).unwrap();
//! engine.record_guess(letter);
//! println!("Guess: {letter}");
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Guessing engine
pub mod solver;

// Training word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{HangmanError, Result};
