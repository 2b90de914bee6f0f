//! Local hangman referee
//!
//! Holds a secret word and scores guesses the way a game server would, so
//! the engine can be exercised offline.

use super::{Letter, LetterSet, Pattern, Word};

/// Game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses allowed before the game is lost
    pub max_wrong_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: 6,
        }
    }
}

/// Result of submitting one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter occurs in the secret this many times
    Hit(usize),
    Miss,
    /// Letter was already submitted; nothing changes
    Repeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A single game against a known secret
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    config: GameConfig,
    guessed: LetterSet,
    wrong_guesses: usize,
}

impl Game {
    #[must_use]
    pub const fn new(secret: Word, config: GameConfig) -> Self {
        Self {
            secret,
            config,
            guessed: LetterSet::EMPTY,
            wrong_guesses: 0,
        }
    }

    /// Submit a letter
    ///
    /// Guesses after the game has ended are reported as `Repeated` and
    /// change nothing.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Game, GameConfig, GameStatus, GuessOutcome, Letter, Word};
    ///
    /// let mut game = Game::new(Word::new("apple").unwrap(), GameConfig::default());
    /// let p = Letter::from_char('p').unwrap();
    /// assert_eq!(game.guess(p), GuessOutcome::Hit(2));
    /// assert_eq!(game.pattern().to_string(), "_pp__");
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.status() != GameStatus::InProgress || !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        let hits = self
            .secret
            .bytes()
            .iter()
            .filter(|&&byte| byte == letter.as_byte())
            .count();

        if hits == 0 {
            self.wrong_guesses += 1;
            GuessOutcome::Miss
        } else {
            GuessOutcome::Hit(hits)
        }
    }

    /// What the player currently sees
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        Pattern::reveal(self.secret.bytes(), self.guessed)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.secret.letters().iter().all(|l| self.guessed.contains(l)) {
            GameStatus::Won
        } else if self.wrong_guesses >= self.config.max_wrong_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    #[must_use]
    pub const fn remaining_wrong(&self) -> usize {
        self.config.max_wrong_guesses.saturating_sub(self.wrong_guesses)
    }
}
