//! Letter presence scoring
//!
//! A word contributes at most 1 to each letter it contains: "aardvark" adds
//! 1 to `a`, not 3. Rankings sort by count descending and break ties
//! alphabetically, so every ranking is reproducible.

use crate::core::{ALPHABET_SIZE, Letter, LetterSet};
use std::cmp::Reverse;

/// A letter and the number of words containing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount {
    pub letter: Letter,
    pub count: u64,
}

/// Per-letter presence counts over some collection of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [u64; ALPHABET_SIZE],
}

impl Default for LetterCounts {
    fn default() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }
}

impl LetterCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count presence over every word yielded
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut counts = Self::new();
        for word in words {
            counts.add_word(word);
        }
        counts
    }

    /// Add one word; bytes outside `a..=z` are ignored
    pub fn add_word(&mut self, word: &[u8]) {
        let present: LetterSet = word.iter().filter_map(|&b| Letter::from_byte(b)).collect();
        self.add_letters(present);
    }

    /// Add one word given its distinct letters
    pub fn add_letters(&mut self, letters: LetterSet) {
        for letter in letters.iter() {
            self.counts[letter.index()] += 1;
        }
    }

    /// Fold another table into this one
    pub fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }

    #[must_use]
    pub const fn count(&self, letter: Letter) -> u64 {
        self.counts[letter.index()]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Letters with a non-zero count, highest first, ties alphabetical
    #[must_use]
    pub fn ranked(&self) -> Vec<LetterCount> {
        let mut ranking: Vec<LetterCount> = Letter::ALL
            .into_iter()
            .map(|letter| LetterCount {
                letter,
                count: self.count(letter),
            })
            .filter(|lc| lc.count > 0)
            .collect();
        // Stable sort keeps the alphabetical order of Letter::ALL among ties
        ranking.sort_by_key(|lc| Reverse(lc.count));
        ranking
    }
}

/// Rank letters by presence count over a word collection
///
/// An empty collection yields an empty ranking.
///
/// # Examples
/// ```
/// use hangman_solver::solver::frequency::score;
///
/// let ranking = score([b"aardvark".as_slice()]);
/// assert_eq!(ranking[0].letter.as_char(), 'a');
/// assert_eq!(ranking[0].count, 1);
///
/// assert!(score(std::iter::empty()).is_empty());
/// ```
pub fn score<'a, I>(words: I) -> Vec<LetterCount>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    LetterCounts::from_words(words).ranked()
}
