//! Substring index over the training corpus
//!
//! For every window length L from `MIN_LEN` up to the longest word, the index
//! stores every contiguous length-L window of every word at least L long.
//! Windows are kept in corpus order, left to right within each word, packed
//! end to end in one byte buffer per length.

use super::WordCorpus;
use crate::core::Pattern;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// All fixed-length windows of the corpus, keyed by window length
#[derive(Debug, Clone, Default)]
pub struct SubstringIndex {
    windows: FxHashMap<usize, Vec<u8>>,
}

impl SubstringIndex {
    /// Shortest window length that is indexed
    pub const MIN_LEN: usize = 3;

    /// Build the index; each length is filled independently in parallel
    #[must_use]
    pub fn build(corpus: &WordCorpus) -> Self {
        let start = Instant::now();
        let words = corpus.words();

        let windows: FxHashMap<usize, Vec<u8>> = (Self::MIN_LEN..=corpus.max_word_len())
            .into_par_iter()
            .map(|len| {
                let mut buffer = Vec::new();
                for word in words.iter().filter(|w| w.len() >= len) {
                    for window in word.bytes().windows(len) {
                        buffer.extend_from_slice(window);
                    }
                }
                (len, buffer)
            })
            .collect();

        let index = Self { windows };
        log::info!(
            "built substring index: {} lengths, {} bytes in {:.2}s",
            index.windows.len(),
            index.windows.values().map(Vec::len).sum::<usize>(),
            start.elapsed().as_secs_f64()
        );
        index
    }

    /// Every window of length `len`, in insertion order
    ///
    /// Lengths outside the indexed range yield nothing.
    pub fn entries(&self, len: usize) -> impl Iterator<Item = &[u8]> {
        self.windows
            .get(&len)
            .filter(|_| len > 0)
            .map(|buffer| buffer.chunks_exact(len))
            .into_iter()
            .flatten()
    }

    /// Number of windows stored for `len`
    #[must_use]
    pub fn entry_count(&self, len: usize) -> usize {
        match self.windows.get(&len) {
            Some(buffer) if len > 0 => buffer.len() / len,
            _ => 0,
        }
    }

    /// Windows of the pattern's length that structurally match it
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    /// use hangman_solver::wordlists::{SubstringIndex, WordCorpus, loader::words_from_slice};
    ///
    /// let corpus = WordCorpus::from_words(words_from_slice(&["apple", "ample"]));
    /// let index = SubstringIndex::build(&corpus);
    ///
    /// let pattern = Pattern::parse("p_e").unwrap();
    /// let hits: Vec<&[u8]> = index.matching(&pattern).collect();
    /// assert_eq!(hits, [b"ple".as_slice(), b"ple".as_slice()]);
    /// ```
    pub fn matching<'a>(&'a self, pattern: &'a Pattern) -> impl Iterator<Item = &'a [u8]> {
        self.entries(pattern.len())
            .filter(move |window| pattern.matches(window))
    }
}
