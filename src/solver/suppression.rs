//! Common-letter suppression
//!
//! Once most of the revealed cells already hold very common letters, the
//! remaining unknown cells are unlikely to hold more of them. The
//! suppressor then skips those letters.

use crate::core::{Letter, LetterSet, Pattern};

/// Skips a fixed set of common letters when they dominate the pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suppressor {
    letters: LetterSet,
    threshold: f64,
}

impl Default for Suppressor {
    fn default() -> Self {
        Self::new(LetterSet::TOP_SIX, 0.67)
    }
}

impl Suppressor {
    #[must_use]
    pub const fn new(letters: LetterSet, threshold: f64) -> Self {
        Self { letters, threshold }
    }

    /// Share of pattern cells holding a suppressible letter
    ///
    /// Every cell counts toward the denominator; only revealed cells can
    /// count toward the numerator, once per cell.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    /// use hangman_solver::solver::Suppressor;
    ///
    /// let ratio = Suppressor::default().ratio(&Pattern::parse("appl_").unwrap());
    /// assert!((ratio - 0.2).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn ratio(&self, pattern: &Pattern) -> f64 {
        if pattern.is_empty() {
            return 0.0;
        }
        let hits = pattern
            .cells()
            .iter()
            .flatten()
            .filter(|&&letter| self.letters.contains(letter))
            .count();
        hits as f64 / pattern.len() as f64
    }

    /// `true` while the pattern is dominated by suppressible letters
    #[must_use]
    pub fn is_active(&self, pattern: &Pattern) -> bool {
        self.ratio(pattern) > self.threshold
    }

    /// `true` iff `letter` is suppressible and the pattern is dominated
    #[must_use]
    pub fn should_suppress(&self, letter: Letter, pattern: &Pattern) -> bool {
        self.letters.contains(letter) && self.is_active(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn ratio(pattern: &str) -> f64 {
        Suppressor::default().ratio(&Pattern::parse(pattern).unwrap())
    }

    #[test]
    fn wildcards_count_only_in_denominator() {
        assert!(ratio("_____").abs() < 1e-9);
        // only 'a' is top-six among the revealed cells
        assert!((ratio("appl_") - 0.2).abs() < 1e-9);
    }

    #[test]
    fn each_revealed_cell_counts_once() {
        // a, e count; p, p do not
        assert!((ratio("app_e") - 0.4).abs() < 1e-9);
        assert!((ratio("anna") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn threshold_is_strict() {
        let suppressor = Suppressor::new(LetterSet::TOP_SIX, 0.5);
        // exactly 0.5 does not trigger
        assert!(!suppressor.is_active(&Pattern::parse("ab").unwrap()));
        assert!(suppressor.is_active(&Pattern::parse("ae_").unwrap()));
    }

    #[test]
    fn suppresses_only_listed_letters() {
        let suppressor = Suppressor::default();
        let pattern = Pattern::parse("tea_").unwrap(); // 0.75
        assert!(suppressor.should_suppress(letter('o'), &pattern));
        assert!(!suppressor.should_suppress(letter('r'), &pattern));

        let sparse = Pattern::parse("te__").unwrap(); // 0.5
        assert!(!suppressor.should_suppress(letter('o'), &sparse));
    }
}
