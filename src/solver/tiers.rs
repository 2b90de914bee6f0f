//! The ordered fallback chain
//!
//! Each tier looks at the turn from a different distance: whole words of the
//! right length, corpus substrings of the right length, then shorter
//! fragments of the pattern, and finally the letter ranking of the whole
//! corpus. The first tier to propose a letter ends the turn.

use super::candidates::CandidateSet;
use super::config::EngineConfig;
use super::frequency::{LetterCount, LetterCounts};
use super::suppression::Suppressor;
use crate::core::{Letter, LetterSet, Pattern};
use crate::wordlists::TrainingData;
use std::fmt;

/// One strategy in the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Rank letters over the narrowed candidate words
    ExactLength,
    /// Rank letters over corpus substrings with the pattern's length
    SubstringMatch,
    /// Rank letters over substrings matching shorter pattern fragments
    FragmentScan,
    /// Rank letters over the whole corpus
    GlobalFallback,
}

impl Tier {
    /// Evaluation order
    pub const ORDER: [Self; 4] = [
        Self::ExactLength,
        Self::SubstringMatch,
        Self::FragmentScan,
        Self::GlobalFallback,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExactLength => "exact-length",
            Self::SubstringMatch => "substring",
            Self::FragmentScan => "fragment-scan",
            Self::GlobalFallback => "global",
        }
    }

    /// Run this tier, returning the letter it would guess
    ///
    /// Tiers never fail: an empty word collection simply yields `None`.
    pub fn propose(self, turn: &mut Turn<'_, '_>) -> Option<Letter> {
        match self {
            Self::ExactLength => exact_length(turn),
            Self::SubstringMatch => substring_match(turn),
            Self::FragmentScan => fragment_scan(turn),
            Self::GlobalFallback => global_fallback(turn),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything one turn's tiers read and write
pub struct Turn<'t, 'a> {
    pattern: &'t Pattern,
    data: &'a TrainingData,
    candidates: &'t mut CandidateSet<'a>,
    config: &'t EngineConfig,
    suppressor: Suppressor,
    /// Guessed letters plus letters excluded in earlier turns
    unavailable: LetterSet,
    /// Letters suppressed during this turn
    suppressed: LetterSet,
}

impl<'t, 'a> Turn<'t, 'a> {
    #[must_use]
    pub fn new(
        pattern: &'t Pattern,
        data: &'a TrainingData,
        candidates: &'t mut CandidateSet<'a>,
        config: &'t EngineConfig,
        unavailable: LetterSet,
    ) -> Self {
        Self {
            pattern,
            data,
            candidates,
            config,
            suppressor: Suppressor::new(config.suppressed_letters, config.suppression_threshold),
            unavailable,
            suppressed: LetterSet::EMPTY,
        }
    }

    /// Letters suppressed so far this turn
    #[must_use]
    pub const fn suppressed(&self) -> LetterSet {
        self.suppressed
    }

    /// Walk a ranking and take the first usable letter
    ///
    /// Unavailable letters are skipped. With `suppress`, letters the
    /// suppressor flags are skipped and remembered for the rest of the turn.
    fn pick(&mut self, ranking: &[LetterCount], suppress: bool) -> Option<Letter> {
        for &LetterCount { letter, .. } in ranking {
            if self.unavailable.contains(letter) || self.suppressed.contains(letter) {
                continue;
            }
            if suppress && self.suppressor.should_suppress(letter, self.pattern) {
                log::trace!("suppressing {letter} for pattern {}", self.pattern);
                self.suppressed.insert(letter);
                continue;
            }
            return Some(letter);
        }
        None
    }
}

fn exact_length(turn: &mut Turn<'_, '_>) -> Option<Letter> {
    turn.candidates.narrow(turn.pattern);
    log::debug!(
        "{} candidates of length {} match {}",
        turn.candidates.len(),
        turn.pattern.len(),
        turn.pattern
    );

    let mut counts = LetterCounts::new();
    for word in turn.candidates.current() {
        counts.add_letters(word.letters());
    }
    turn.pick(&counts.ranked(), true)
}

fn substring_match(turn: &mut Turn<'_, '_>) -> Option<Letter> {
    let counts = LetterCounts::from_words(turn.data.index().matching(turn.pattern));
    turn.pick(&counts.ranked(), true)
}

fn fragment_scan(turn: &mut Turn<'_, '_>) -> Option<Letter> {
    let (data, pattern) = (turn.data, turn.pattern);
    let len = pattern.len();

    for k in turn.config.fragment_divisors.clone() {
        let Some(fragment_len) = len.checked_div(k).filter(|&l| l > 0) else {
            continue;
        };

        let mut counts = LetterCounts::new();
        for start in 0..=len - fragment_len {
            if let Some(fragment) = pattern.fragment(start, fragment_len) {
                counts.merge(&LetterCounts::from_words(data.index().matching(&fragment)));
            }
        }

        if let Some(letter) = turn.pick(&counts.ranked(), false) {
            log::debug!("fragment scan settled at k={k} (fragments of {fragment_len})");
            return Some(letter);
        }
    }
    None
}

fn global_fallback(turn: &mut Turn<'_, '_>) -> Option<Letter> {
    let data = turn.data;
    turn.pick(data.corpus().global_ranking(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn data(words: &[&str]) -> TrainingData {
        TrainingData::from_words(words_from_slice(words))
    }

    /// Run a single tier in isolation
    fn run(
        tier: Tier,
        data: &TrainingData,
        pattern: &str,
        unavailable: &str,
    ) -> (Option<Letter>, LetterSet) {
        let pattern = Pattern::parse(pattern).unwrap();
        let config = EngineConfig::default();
        let mut candidates = CandidateSet::new(data.corpus().words());
        let mut turn = Turn::new(
            &pattern,
            data,
            &mut candidates,
            &config,
            LetterSet::from_bytes(unavailable.as_bytes()),
        );
        let letter = tier.propose(&mut turn);
        (letter, turn.suppressed())
    }

    #[test]
    fn order_is_fixed() {
        assert_eq!(
            Tier::ORDER,
            [
                Tier::ExactLength,
                Tier::SubstringMatch,
                Tier::FragmentScan,
                Tier::GlobalFallback
            ]
        );
        assert_eq!(Tier::FragmentScan.to_string(), "fragment-scan");
    }

    #[test]
    fn exact_length_picks_most_common_letter() {
        let data = data(&["apple", "apply", "angle"]);
        let (letter, _) = run(Tier::ExactLength, &data, "_____", "");
        assert_eq!(letter, Some(self::letter('a')));
    }

    #[test]
    fn exact_length_skips_guessed() {
        let data = data(&["apple", "apply", "angle"]);
        // a and l tie at 3; with a gone, l is next
        let (letter, _) = run(Tier::ExactLength, &data, "_____", "a");
        assert_eq!(letter, Some(self::letter('l')));
    }

    #[test]
    fn exact_length_empty_when_no_word_fits() {
        let data = data(&["apple", "apply"]);
        let (letter, suppressed) = run(Tier::ExactLength, &data, "___", "");
        assert_eq!(letter, None);
        assert!(suppressed.is_empty());
    }

    #[test]
    fn exact_length_suppresses_when_dominated() {
        // "tea_" has ratio 0.75; candidates rank o above r
        let data = data(&["teao", "teao", "tear"]);
        let (letter, suppressed) = run(Tier::ExactLength, &data, "tea_", "tea");
        assert_eq!(letter, Some(self::letter('r')));
        assert_eq!(suppressed.to_string(), "o");
    }

    #[test]
    fn substring_match_uses_windows_of_pattern_length() {
        // no 3-letter words, but "cat" and "cab" occur inside longer words
        let data = data(&["scatter", "cabin"]);
        let (letter, _) = run(Tier::SubstringMatch, &data, "ca_", "ca");
        // windows: sca cat att tte ter cab abi bin; matching "ca_": cat, cab
        assert_eq!(letter, Some(self::letter('b')));
    }

    #[test]
    fn substring_match_empty_for_unindexed_length() {
        let data = data(&["abc"]);
        let (letter, _) = run(Tier::SubstringMatch, &data, "_____", "");
        assert_eq!(letter, None);
    }

    #[test]
    fn fragment_scan_combines_windows() {
        // pattern of length 8 splits into length-4 fragments at k=2
        let data = data(&["quiz", "quit"]);
        let (letter, _) = run(Tier::FragmentScan, &data, "qu______", "qu");
        // fragments: qu__ matches quiz, quit; the all-wildcard ones match both too
        assert_eq!(letter, Some(self::letter('i')));
    }

    #[test]
    fn fragment_scan_skips_zero_length_fragments() {
        // length 1 pattern: every k yields a fragment length of 0
        let data = data(&["abc"]);
        let (letter, _) = run(Tier::FragmentScan, &data, "_", "");
        assert_eq!(letter, None);
    }

    #[test]
    fn fragment_scan_does_not_suppress() {
        let data = data(&["nto"]);
        // "aeion__" has ratio 5/7, yet the scan still offers top-six 't'
        // (only fragment "n__" matches anything: the window "nto")
        let (letter, suppressed) = run(Tier::FragmentScan, &data, "aeion__", "aeion");
        assert_eq!(letter, Some(self::letter('t')));
        assert!(suppressed.is_empty());
    }

    #[test]
    fn global_fallback_walks_corpus_ranking() {
        let data = data(&["apple", "apply", "angle"]);
        let (letter, _) = run(Tier::GlobalFallback, &data, "__________", "al");
        assert_eq!(letter, Some(self::letter('e')));
    }

    #[test]
    fn global_fallback_suppresses_when_dominated() {
        let data = data(&["eat", "tea", "zoo"]);
        // pattern "ate" is fully top-six (ratio 1.0); o is suppressed, z taken
        let (letter, suppressed) = run(Tier::GlobalFallback, &data, "ate", "aet");
        assert_eq!(letter, Some(self::letter('z')));
        assert_eq!(suppressed.to_string(), "o");
    }
}
