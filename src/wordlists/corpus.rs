//! The training corpus
//!
//! Holds the word list exactly as loaded and the letter ranking over the
//! whole list, which is the engine's last-resort fallback.

use crate::core::Word;
use crate::error::{HangmanError, Result};
use crate::solver::frequency::{LetterCount, LetterCounts};
use std::path::Path;

/// Immutable training word list
#[derive(Debug, Clone)]
pub struct WordCorpus {
    words: Vec<Word>,
    max_word_len: usize,
    global_ranking: Vec<LetterCount>,
}

impl WordCorpus {
    /// Build a corpus from words already in memory
    ///
    /// The global letter ranking is computed here, once.
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let max_word_len = words.iter().map(Word::len).max().unwrap_or(0);
        let global_ranking = LetterCounts::from_words(words.iter().map(Word::bytes)).ranked();

        Self {
            words,
            max_word_len,
            global_ranking,
        }
    }

    /// Load a corpus from a line-delimited file
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::Io` if the file is unreadable and
    /// `HangmanError::EmptyCorpus` if it holds no valid words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = super::loader::load_from_file(path)?;
        if words.is_empty() {
            return Err(HangmanError::EmptyCorpus {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::from_words(words))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word, or 0 for an empty corpus
    #[inline]
    #[must_use]
    pub const fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Letters ranked by how many corpus words contain them
    ///
    /// Sorted by count descending, ties alphabetical. Letters that occur in
    /// no word are absent.
    #[inline]
    #[must_use]
    pub fn global_ranking(&self) -> &[LetterCount] {
        &self.global_ranking
    }
}
