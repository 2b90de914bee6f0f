//! Main hangman guessing interface

use super::candidates::CandidateSet;
use super::config::{EngineConfig, SuppressionScope};
use super::tiers::{Tier, Turn};
use crate::core::{Letter, LetterSet, Pattern, PatternError, Word};
use crate::error::{HangmanError, Result};
use crate::wordlists::TrainingData;

/// The outcome of one turn's decision procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub letter: Letter,
    /// Tier that produced the letter
    pub tier: Tier,
    /// Candidate words left after narrowing
    pub candidates: usize,
    /// Letters suppressed while deciding
    pub suppressed: LetterSet,
}

/// One game's worth of guessing state over shared training data
///
/// The training data is borrowed, so any number of engines can run over the
/// same corpus and index. Per-game state (candidates, guessed letters,
/// exclusions) lives here and is cleared by [`GuessEngine::reset`].
pub struct GuessEngine<'a> {
    data: &'a TrainingData,
    config: EngineConfig,
    candidates: CandidateSet<'a>,
    guessed: LetterSet,
    excluded: LetterSet,
    word_len: Option<usize>,
}

impl<'a> GuessEngine<'a> {
    /// Create an engine ready for a new game
    #[must_use]
    pub fn new(data: &'a TrainingData, config: EngineConfig) -> Self {
        Self {
            data,
            config,
            candidates: CandidateSet::new(data.corpus().words()),
            guessed: LetterSet::EMPTY,
            excluded: LetterSet::EMPTY,
            word_len: None,
        }
    }

    /// Start a new game: all words are candidates again, nothing is guessed
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::new(self.data.corpus().words());
        self.guessed = LetterSet::EMPTY;
        self.excluded = LetterSet::EMPTY;
        self.word_len = None;
    }

    /// Choose the next letter for `pattern`
    ///
    /// The letter is not recorded as guessed; call [`GuessEngine::record_guess`]
    /// once it has actually been submitted.
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::InvalidPattern` if the pattern is empty or its
    /// length differs from earlier patterns in this game, and
    /// `HangmanError::ExhaustedAlphabet` if no tier can offer a letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    /// use hangman_solver::solver::{EngineConfig, GuessEngine, Tier};
    /// use hangman_solver::wordlists::{TrainingData, loader::words_from_slice};
    ///
    /// let data = TrainingData::from_words(words_from_slice(&["apple", "apply", "angle"]));
    /// let mut engine = GuessEngine::new(&data, EngineConfig::default());
    ///
    /// let decision = engine.decide(&Pattern::blank(5).unwrap()).unwrap();
    /// assert_eq!(decision.letter.as_char(), 'a');
    /// assert_eq!(decision.tier, Tier::ExactLength);
    /// assert_eq!(decision.candidates, 3);
    /// ```
    pub fn decide(&mut self, pattern: &Pattern) -> Result<Decision> {
        self.check_length(pattern)?;

        let mut turn = Turn::new(
            pattern,
            self.data,
            &mut self.candidates,
            &self.config,
            self.guessed.union(self.excluded),
        );

        let proposal = Tier::ORDER
            .into_iter()
            .find_map(|tier| tier.propose(&mut turn).map(|letter| (letter, tier)));
        let suppressed = turn.suppressed();

        if self.config.suppression_scope == SuppressionScope::Game {
            self.excluded = self.excluded.union(suppressed);
        }

        let (letter, tier) = proposal.ok_or(HangmanError::ExhaustedAlphabet)?;
        log::debug!(
            "pattern {pattern}: guessing {letter} via {tier} ({} candidates, suppressed [{suppressed}])",
            self.candidates.len()
        );

        Ok(Decision {
            letter,
            tier,
            candidates: self.candidates.len(),
            suppressed,
        })
    }

    /// Choose the next letter for `pattern`; see [`GuessEngine::decide`]
    ///
    /// # Errors
    ///
    /// Same as [`GuessEngine::decide`].
    pub fn next_guess(&mut self, pattern: &Pattern) -> Result<Letter> {
        self.decide(pattern).map(|decision| decision.letter)
    }

    /// Record a letter as submitted to the game
    pub fn record_guess(&mut self, letter: Letter) {
        self.guessed.insert(letter);
    }

    /// Letters submitted this game
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Letters suppressed for the rest of this game without being guessed
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Current candidate words
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        self.candidates.current()
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn check_length(&mut self, pattern: &Pattern) -> Result<()> {
        if pattern.is_empty() {
            return Err(PatternError::Empty.into());
        }
        match self.word_len {
            Some(expected) if expected != pattern.len() => Err(PatternError::LengthChanged {
                expected,
                found: pattern.len(),
            }
            .into()),
            _ => {
                self.word_len = Some(pattern.len());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, GameConfig, GameStatus};
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    fn data(words: &[&str]) -> TrainingData {
        TrainingData::from_words(words_from_slice(words))
    }

    fn guessed(engine: &mut GuessEngine<'_>, letters: &str) {
        for ch in letters.chars() {
            engine.record_guess(letter(ch));
        }
    }

    #[test]
    fn first_guess_on_blank_pattern() {
        let data = data(&["apple", "apply", "angle"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());

        let decision = engine.decide(&pattern("_____")).unwrap();
        // a and l are both in all three words; alphabetical tie-break picks a
        assert_eq!(decision.letter, letter('a'));
        assert_eq!(decision.tier, Tier::ExactLength);
        assert!(decision.suppressed.is_empty());
    }

    #[test]
    fn mostly_revealed_pattern_below_threshold() {
        let data = data(&["apple", "apply", "angle"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());
        guessed(&mut engine, "ape");

        // revealed top-six cells: a and e, so 2/5 = 0.4, no suppression
        let decision = engine.decide(&pattern("app_e")).unwrap();
        assert_eq!(decision.letter, letter('l'));
        assert_eq!(decision.candidates, 1);
        assert!(decision.suppressed.is_empty());
        assert!(engine.excluded().is_empty());
    }

    #[test]
    fn unknown_length_falls_through_to_fragment_scan() {
        let data = data(&["apple", "apply", "angle"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());

        let decision = engine.decide(&pattern("________")).unwrap();
        assert_eq!(decision.candidates, 0);
        assert_eq!(decision.tier, Tier::FragmentScan);
        assert!(!engine.guessed().contains(decision.letter));
    }

    #[test]
    fn substring_tier_covers_short_patterns() {
        let data = data(&["apple", "apply", "angle"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());

        let decision = engine.decide(&pattern("___")).unwrap();
        assert_eq!(decision.candidates, 0);
        assert_eq!(decision.tier, Tier::SubstringMatch);
    }

    #[test]
    fn tiny_patterns_reach_global_fallback() {
        let data = data(&["apple", "apply", "angle"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());

        let decision = engine.decide(&pattern("__")).unwrap();
        assert_eq!(decision.tier, Tier::GlobalFallback);
        assert_eq!(decision.letter, letter('a'));
    }

    #[test]
    fn exhausted_alphabet_is_an_error() {
        let data = data(&["abc"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());
        guessed(&mut engine, "abc");

        let err = engine.decide(&pattern("___")).unwrap_err();
        assert!(matches!(err, HangmanError::ExhaustedAlphabet));
    }

    #[test]
    fn pattern_length_is_fixed_per_game() {
        let data = data(&["apple"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());
        engine.decide(&pattern("_____")).unwrap();

        let err = engine.decide(&pattern("____")).unwrap_err();
        assert!(matches!(
            err,
            HangmanError::InvalidPattern(PatternError::LengthChanged {
                expected: 5,
                found: 4
            })
        ));

        engine.reset();
        assert!(engine.decide(&pattern("____")).is_ok());
    }

    #[test]
    fn repeated_call_returns_same_letter() {
        let data = data(&["teanoi", "teanox", "tearox"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());
        guessed(&mut engine, "teano");

        let first = engine.next_guess(&pattern("teano_")).unwrap();
        let second = engine.next_guess(&pattern("teano_")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, letter('x'));
    }

    #[test]
    fn game_scope_keeps_suppressed_letters_out() {
        let data = data(&["teanoi", "teanox"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());
        guessed(&mut engine, "teano");

        // 5/6 revealed cells are top-six: i is suppressed, x chosen
        let decision = engine.decide(&pattern("teano_")).unwrap();
        assert_eq!(decision.letter, letter('x'));
        assert_eq!(decision.suppressed.to_string(), "i");
        assert_eq!(engine.excluded().to_string(), "i");
        assert!(!engine.guessed().contains(letter('i')));

        // i never comes back this game, even where nothing would suppress it
        engine.record_guess(letter('x'));
        let err = engine.decide(&pattern("______")).unwrap_err();
        assert!(matches!(err, HangmanError::ExhaustedAlphabet));

        engine.reset();
        assert!(engine.excluded().is_empty());
    }

    #[test]
    fn turn_scope_forgets_suppressed_letters() {
        let data = data(&["teanoi", "teanox"]);
        let config = EngineConfig {
            suppression_scope: SuppressionScope::Turn,
            ..EngineConfig::default()
        };
        let mut engine = GuessEngine::new(&data, config);
        guessed(&mut engine, "teano");

        let decision = engine.decide(&pattern("teano_")).unwrap();
        assert_eq!(decision.suppressed.to_string(), "i");
        assert!(engine.excluded().is_empty());

        engine.record_guess(letter('x'));
        assert_eq!(engine.next_guess(&pattern("______")).unwrap(), letter('i'));
    }

    #[test]
    fn reset_restores_full_candidate_set() {
        let data = data(&["apple", "angle", "ape"]);
        let mut engine = GuessEngine::new(&data, EngineConfig::default());
        engine.decide(&pattern("_n___")).unwrap();
        assert_eq!(engine.candidates().len(), 1);

        engine.reset();
        assert_eq!(engine.candidates().len(), 3);
        assert!(engine.guessed().is_empty());
    }

    fn corpus_and_secret() -> impl Strategy<Value = (Vec<String>, String)> {
        (
            prop::collection::vec("[a-h]{1,8}", 1..25),
            "[a-h]{1,8}",
        )
    }

    proptest! {
        #[test]
        fn never_repeats_a_guessed_letter((words, secret) in corpus_and_secret()) {
            let data = TrainingData::from_words(words_from_slice(
                &words.iter().map(String::as_str).collect::<Vec<_>>(),
            ));
            let mut engine = GuessEngine::new(&data, EngineConfig::default());
            let mut game = Game::new(Word::new(secret).unwrap(), GameConfig::default());

            while game.status() == GameStatus::InProgress {
                match engine.next_guess(&game.pattern()) {
                    Ok(letter) => {
                        prop_assert!(!engine.guessed().contains(letter));
                        prop_assert!(!engine.excluded().contains(letter));
                        prop_assert!(!game.guessed().contains(letter));
                        engine.record_guess(letter);
                        game.guess(letter);
                    }
                    Err(HangmanError::ExhaustedAlphabet) => break,
                    Err(e) => prop_assert!(false, "unexpected error: {e}"),
                }
            }
        }
    }
}
