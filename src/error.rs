//! Error types produced by the engine and its word sources

use crate::core::PatternError;
use std::path::PathBuf;
use thiserror::Error;

/// The errors that `hangman_solver` can produce.
#[derive(Debug, Error)]
pub enum HangmanError {
    /// The word list could not be read.
    #[error("cannot read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word list was readable but held no usable words.
    #[error("word list {} contains no usable words", path.display())]
    EmptyCorpus { path: PathBuf },

    /// Every tier ran dry; no unguessed letter is left to offer.
    #[error("no unguessed letter is available")]
    ExhaustedAlphabet,

    /// The pattern was rejected; the inner error says why.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),
}

pub type Result<T, E = HangmanError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_message_includes_cause() {
        let err = HangmanError::from(PatternError::LengthChanged {
            expected: 5,
            found: 4,
        });
        assert_eq!(
            err.to_string(),
            "invalid pattern: pattern length changed mid-game: expected 5, found 4"
        );
    }

    #[test]
    fn io_message_names_path() {
        let err = HangmanError::Io {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "cannot read word list words.txt");
    }
}
