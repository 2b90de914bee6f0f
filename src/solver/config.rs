//! Engine tuning knobs

use crate::core::LetterSet;
use std::ops::RangeInclusive;

/// How long a suppressed letter stays excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuppressionScope {
    /// Excluded for the rest of the game without costing a guess
    #[default]
    Game,
    /// Excluded only for the turn that suppressed it
    Turn,
}

impl SuppressionScope {
    /// Parse a scope name: "game" or "turn"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "game" => Some(Self::Game),
            "turn" => Some(Self::Turn),
            _ => None,
        }
    }
}

/// Decision-procedure parameters shared by every tier
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Letters subject to suppression (default {a, e, i, o, n, t})
    pub suppressed_letters: LetterSet,
    /// Suppress once the revealed share of those letters exceeds this
    pub suppression_threshold: f64,
    pub suppression_scope: SuppressionScope,
    /// Fragment counts k tried by the fragment scan, in order
    pub fragment_divisors: RangeInclusive<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suppressed_letters: LetterSet::TOP_SIX,
            suppression_threshold: 0.67,
            suppression_scope: SuppressionScope::Game,
            fragment_divisors: 2..=10,
        }
    }
}
