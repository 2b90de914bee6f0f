//! Per-game candidate narrowing
//!
//! Starts as the whole corpus and only ever shrinks. Narrowing keeps the
//! words of the pattern's length that match every revealed cell; it does
//! not separately exclude words containing missed letters.

use crate::core::{Pattern, Word};

/// Training words still consistent with the revealed pattern
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    words: Vec<&'a Word>,
}

impl<'a> CandidateSet<'a> {
    /// Start a game with every corpus word
    #[must_use]
    pub fn new(corpus: &'a [Word]) -> Self {
        Self {
            words: corpus.iter().collect(),
        }
    }

    /// Keep only the current words that structurally match `pattern`
    pub fn narrow(&mut self, pattern: &Pattern) {
        self.words.retain(|word| pattern.matches(word.bytes()));
    }

    /// Read-only view of the surviving words, in corpus order
    #[must_use]
    pub fn current(&self) -> &[&'a Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
