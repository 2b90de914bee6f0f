//! Command implementations

pub mod guess;
pub mod simple;
pub mod simulate;
pub mod solve;

pub use guess::{GuessResult, guess_once};
pub use simple::run_simple;
pub use simulate::{SimulationStats, run_simulation, sample_secrets, split_holdout};
pub use solve::{GameRecord, GuessStep, play_game, solve_word};

use crate::core::{Pattern, PatternError};

/// Parse a pattern as a game server displays it
///
/// Accepts the spaced form (`"_ p p _ e "`) as well as the canonical one;
/// all whitespace is dropped before parsing.
///
/// # Errors
///
/// Returns `PatternError` if what remains is not a valid pattern.
///
/// # Examples
/// ```
/// use hangman_solver::commands::parse_display_pattern;
///
/// let pattern = parse_display_pattern("_ p p _ e ").unwrap();
/// assert_eq!(pattern.to_string(), "_pp_e");
/// ```
pub fn parse_display_pattern(text: &str) -> Result<Pattern, PatternError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Pattern::parse(&compact)
}
