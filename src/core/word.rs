//! Dictionary word representation
//!
//! A Word is an immutable, non-empty run of lowercase ASCII letters together
//! with the set of letters it contains, so presence checks never rescan it.

use super::{Letter, LetterSet};
use std::fmt;
use thiserror::Error;

/// A dictionary word of any length ≥ 1
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word contains invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalised to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("o'clock").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let mut letters = LetterSet::EMPTY;
        for (position, character) in text.chars().enumerate() {
            let letter = Letter::from_char(character)
                .ok_or(WordError::InvalidCharacter { character, position })?;
            letters.insert(letter);
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false` for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(letter)
    }

    /// Distinct letters occurring in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
