//! Formatting utilities for terminal output

use crate::core::GuessOutcome;

/// Space out a canonical pattern the way game boards show it
///
/// `"_pp_e"` becomes `"_ p p _ e"`.
#[must_use]
pub fn spaced_pattern(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);
    for (i, ch) in pattern.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Short marker for a guess outcome
#[must_use]
pub fn outcome_marker(outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Hit(1) => "✓".to_string(),
        GuessOutcome::Hit(n) => format!("✓×{n}"),
        GuessOutcome::Miss => "✗".to_string(),
        GuessOutcome::Repeated => "↺".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_inserts_gaps() {
        assert_eq!(spaced_pattern("_pp_e"), "_ p p _ e");
        assert_eq!(spaced_pattern("a"), "a");
        assert_eq!(spaced_pattern(""), "");
    }

    #[test]
    fn outcome_markers() {
        assert_eq!(outcome_marker(GuessOutcome::Hit(1)), "✓");
        assert_eq!(outcome_marker(GuessOutcome::Hit(2)), "✓×2");
        assert_eq!(outcome_marker(GuessOutcome::Miss), "✗");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
