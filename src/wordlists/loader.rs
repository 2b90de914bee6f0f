//! Word list loading utilities
//!
//! Reads line-delimited word sources: one word per line, used verbatim
//! apart from trimming and lowercasing. Duplicates are kept.

use crate::core::Word;
use crate::error::{HangmanError, Result};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns `HangmanError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words_250000_train.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HangmanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_str(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse line-delimited text into words, in source order
///
/// Blank lines are ignored; lines that are not purely ASCII letters are
/// skipped with a warning.
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    skipped += 1;
                    log::debug!("skipping {trimmed:?}: {e}");
                    None
                }
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid lines in word list");
    }
    words
}

/// Convert a string slice list to a Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "apply", "angle"]);
/// assert_eq!(words.len(), 3);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
