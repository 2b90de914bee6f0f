//! Revealed-word patterns
//!
//! A pattern has one cell per letter of the secret word. Each cell is either
//! a known letter or a wildcard. The canonical text form writes wildcards as
//! `_`; `.` is accepted on input as well.
//!
//! Matching is structural: a pattern matches a candidate of exactly the same
//! length whose letters agree with every known cell. It is never a prefix or
//! substring match.

use super::Letter;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Wildcard character used by the canonical text form
pub const WILDCARD: char = '_';

/// Errors raised when a pattern is rejected at the API boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must have at least one cell")]
    Empty,
    #[error("pattern contains invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("pattern length changed mid-game: expected {expected}, found {found}")]
    LengthChanged { expected: usize, found: usize },
}

/// Positional view of the secret word: known letters and wildcards
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Option<Letter>>,
}

impl Pattern {
    /// A pattern of `len` wildcards (the start of every game)
    ///
    /// # Errors
    /// Returns `PatternError::Empty` if `len` is zero.
    pub fn blank(len: usize) -> Result<Self, PatternError> {
        if len == 0 {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            cells: vec![None; len],
        })
    }

    /// Parse the canonical text form, one character per cell
    ///
    /// Letters of either case are known cells; `_` and `.` are wildcards.
    ///
    /// # Errors
    /// Returns `PatternError` for empty input or any other character.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("app_e").unwrap();
    /// assert_eq!(pattern.len(), 5);
    /// assert_eq!(pattern.known_count(), 4);
    /// assert!(pattern.matches(b"apple"));
    /// assert!(!pattern.matches(b"apples"));
    ///
    /// assert_eq!(Pattern::parse("a.b").unwrap().to_string(), "a_b");
    /// assert!(Pattern::parse("a b").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let cells = text
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '_' | '.' => Ok(None),
                _ => Letter::from_char(character)
                    .map(Some)
                    .ok_or(PatternError::InvalidCharacter { character, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { cells })
    }

    /// Build the pattern a player would see for `secret` after guessing `revealed`
    #[must_use]
    pub fn reveal(secret: &[u8], revealed: super::LetterSet) -> Self {
        let cells = secret
            .iter()
            .map(|&byte| Letter::from_byte(byte).filter(|&letter| revealed.contains(letter)))
            .collect();
        Self { cells }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a constructed pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<Letter>] {
        &self.cells
    }

    /// Number of revealed cells
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// `true` once every cell is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Full structural match against a candidate's bytes
    ///
    /// The candidate must have exactly the pattern's length; wildcards
    /// accept any byte and known cells require equality.
    #[inline]
    #[must_use]
    pub fn matches(&self, candidate: &[u8]) -> bool {
        candidate.len() == self.cells.len()
            && self
                .cells
                .iter()
                .zip(candidate)
                .all(|(cell, &byte)| cell.is_none_or(|letter| letter.as_byte() == byte))
    }

    /// Contiguous fragment of `len` cells starting at `start`
    ///
    /// Returns `None` if the range is empty or runs past the end.
    #[must_use]
    pub fn fragment(&self, start: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        self.cells.get(start..start + len).map(|cells| Self {
            cells: cells.to_vec(),
        })
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}
