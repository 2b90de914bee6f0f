//! Training word lists
//!
//! Everything derived from the training dictionary lives here. It is built
//! once per process and only ever read afterwards, so any number of game
//! sessions (sequential or on other threads) can borrow it.

mod corpus;
pub mod loader;
mod substring;

pub use corpus::WordCorpus;
pub use substring::SubstringIndex;

use crate::core::Word;
use crate::error::Result;
use std::path::Path;

/// The immutable knowledge shared by every game: corpus, global ranking and
/// substring index
#[derive(Debug, Clone)]
pub struct TrainingData {
    corpus: WordCorpus,
    index: SubstringIndex,
}

impl TrainingData {
    /// Build from words already in memory
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::wordlists::{TrainingData, loader::words_from_slice};
    ///
    /// let data = TrainingData::from_words(words_from_slice(&["apple", "apply", "angle"]));
    /// assert_eq!(data.corpus().len(), 3);
    /// assert_eq!(data.index().entry_count(5), 3);
    /// ```
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let corpus = WordCorpus::from_words(words);
        let index = SubstringIndex::build(&corpus);
        Self { corpus, index }
    }

    /// Load and index a line-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::Io` if the file cannot be read and
    /// `HangmanError::EmptyCorpus` if it contains no usable words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let corpus = WordCorpus::load(path)?;
        let index = SubstringIndex::build(&corpus);
        Ok(Self { corpus, index })
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &WordCorpus {
        &self.corpus
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &SubstringIndex {
        &self.index
    }
}
