//! Word solving command
//!
//! Plays one local game against a known secret and records every turn.

use crate::core::{Game, GameConfig, GameStatus, GuessOutcome, Letter, LetterSet, Word};
use crate::error::{HangmanError, Result};
use crate::solver::{GuessEngine, Tier};

/// A single turn of a played game
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub letter: Letter,
    pub tier: Tier,
    pub outcome: GuessOutcome,
    /// Pattern shown after the guess, canonical form
    pub pattern_after: String,
    /// Candidate words left after narrowing for this turn
    pub candidates: usize,
    pub suppressed: LetterSet,
}

/// Result of playing one game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub secret: String,
    pub won: bool,
    pub wrong_guesses: usize,
    pub steps: Vec<GuessStep>,
}

/// Play one game with `engine` against `secret`
///
/// The engine is reset first, so one engine can play many games in turn.
/// A game where the engine runs out of letters counts as lost.
///
/// # Errors
///
/// Returns an error only for engine failures other than running out of
/// letters, which cannot happen for patterns produced by the local game.
pub fn play_game(
    engine: &mut GuessEngine<'_>,
    secret: Word,
    config: GameConfig,
) -> Result<GameRecord> {
    engine.reset();
    let mut game = Game::new(secret, config);
    let mut steps = Vec::new();

    while game.status() == GameStatus::InProgress {
        let decision = match engine.decide(&game.pattern()) {
            Ok(decision) => decision,
            Err(HangmanError::ExhaustedAlphabet) => {
                log::warn!("ran out of letters on {}", game.secret());
                break;
            }
            Err(e) => return Err(e),
        };

        engine.record_guess(decision.letter);
        let outcome = game.guess(decision.letter);

        steps.push(GuessStep {
            letter: decision.letter,
            tier: decision.tier,
            outcome,
            pattern_after: game.pattern().to_string(),
            candidates: decision.candidates,
            suppressed: decision.suppressed,
        });
    }

    Ok(GameRecord {
        secret: game.secret().text().to_string(),
        won: game.status() == GameStatus::Won,
        wrong_guesses: game.wrong_guesses(),
        steps,
    })
}

/// Solve a specific word
///
/// # Errors
///
/// Returns an error if the target is not a valid word or the engine fails.
pub fn solve_word(
    engine: &mut GuessEngine<'_>,
    target: &str,
    config: GameConfig,
) -> anyhow::Result<GameRecord> {
    let secret = Word::new(target).map_err(|e| anyhow::anyhow!("invalid target word: {e}"))?;
    Ok(play_game(engine, secret, config)?)
}
