//! Hangman guessing engine
//!
//! Scores letters by how many plausible words contain them, walking a fixed
//! chain of increasingly loose word sources until one offers a letter.

mod candidates;
mod config;
mod engine;
pub mod frequency;
mod suppression;
pub mod tiers;

pub use candidates::CandidateSet;
pub use config::{EngineConfig, SuppressionScope};
pub use engine::{Decision, GuessEngine};
pub use frequency::{LetterCount, LetterCounts};
pub use suppression::Suppressor;
pub use tiers::Tier;
