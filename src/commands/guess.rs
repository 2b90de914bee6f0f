//! One-shot guess command
//!
//! Answers a single "what next?" question for a pattern and the letters
//! already tried, without any game state beyond that.

use crate::core::{Letter, Pattern};
use crate::solver::{Decision, EngineConfig, GuessEngine};
use crate::wordlists::TrainingData;
use anyhow::{Context, Result, bail};

/// Result of a one-shot guess
#[derive(Debug, Clone)]
pub struct GuessResult {
    pub pattern: Pattern,
    pub decision: Decision,
}

/// Decide the next letter for `pattern` given letters already guessed
///
/// Letters revealed in the pattern count as guessed even if `guessed` omits
/// them.
///
/// # Errors
///
/// Returns an error if `guessed` contains a non-letter or the engine cannot
/// offer a letter.
pub fn guess_once(
    data: &TrainingData,
    config: EngineConfig,
    pattern: Pattern,
    guessed: &str,
) -> Result<GuessResult> {
    let mut engine = GuessEngine::new(data, config);

    for ch in guessed.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        let Some(letter) = Letter::from_char(ch) else {
            bail!("guessed letters must be a-z, got {ch:?}");
        };
        engine.record_guess(letter);
    }
    for &letter in pattern.cells().iter().flatten() {
        engine.record_guess(letter);
    }

    let decision = engine
        .decide(&pattern)
        .with_context(|| format!("no guess available for {pattern}"))?;
    Ok(GuessResult { pattern, decision })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn data() -> TrainingData {
        TrainingData::from_words(words_from_slice(&["apple", "apply", "angle"]))
    }

    #[test]
    fn blank_pattern_guesses_most_common() {
        let result = guess_once(
            &data(),
            EngineConfig::default(),
            Pattern::blank(5).unwrap(),
            "",
        )
        .unwrap();
        assert_eq!(result.decision.letter.as_char(), 'a');
    }

    #[test]
    fn revealed_letters_count_as_guessed() {
        let result = guess_once(
            &data(),
            EngineConfig::default(),
            Pattern::parse("app_e").unwrap(),
            "",
        )
        .unwrap();
        assert_eq!(result.decision.letter.as_char(), 'l');
    }

    #[test]
    fn accepts_separated_letter_list() {
        let result = guess_once(
            &data(),
            EngineConfig::default(),
            Pattern::blank(5).unwrap(),
            "a, l",
        )
        .unwrap();
        assert_eq!(result.decision.letter.as_char(), 'e');
    }

    #[test]
    fn rejects_bad_guessed_letters() {
        let result = guess_once(
            &data(),
            EngineConfig::default(),
            Pattern::blank(5).unwrap(),
            "a1",
        );
        assert!(result.is_err());
    }
}
