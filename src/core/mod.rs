//! Core domain types for hangman
//!
//! Letters, words, revealed patterns and a local game referee. Everything
//! here is pure and independent of the training data.

mod game;
mod letter;
mod pattern;
mod word;

pub use game::{Game, GameConfig, GameStatus, GuessOutcome};
pub use letter::{ALPHABET_SIZE, Letter, LetterSet};
pub use pattern::{Pattern, PatternError, WILDCARD};
pub use word::{Word, WordError};
