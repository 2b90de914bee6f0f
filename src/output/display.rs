//! Display functions for command results

use super::formatters::{create_progress_bar, outcome_marker, spaced_pattern};
use crate::commands::{GameRecord, GuessResult, SimulationStats};
use crate::core::GuessOutcome;
use crate::solver::Tier;
use colored::Colorize;

/// Print the answer to a one-shot guess
pub fn print_guess_result(result: &GuessResult) {
    let decision = &result.decision;
    println!(
        "\nPattern:    {}",
        spaced_pattern(&result.pattern.to_string()).bright_white()
    );
    println!(
        "Next guess: {}",
        decision.letter.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("Tier:       {}", decision.tier);
    println!("Candidates: {}", decision.candidates);
    if !decision.suppressed.is_empty() {
        println!("Suppressed: {}", decision.suppressed.to_string().bright_black());
    }
}

/// Print the trace of a solved game
pub fn print_solve_result(record: &GameRecord, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        record.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in record.steps.iter().enumerate() {
        let marker = outcome_marker(step.outcome);
        let marker = match step.outcome {
            GuessOutcome::Hit(_) => marker.green(),
            GuessOutcome::Miss => marker.red(),
            GuessOutcome::Repeated => marker.bright_black(),
        };
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            step.letter.to_string().to_uppercase(),
            marker,
            spaced_pattern(&step.pattern_after)
        );

        if verbose {
            println!("  Tier:       {}", step.tier);
            println!("  Candidates: {}", step.candidates);
            if !step.suppressed.is_empty() {
                println!("  Suppressed: {}", step.suppressed);
            }
        }
    }

    println!();
    if record.won {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({} wrong)",
                record.steps.len(),
                record.wrong_guesses
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} wrong guesses", record.wrong_guesses)
                .red()
                .bold()
        );
    }
}

/// Print aggregate statistics from a simulation run
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", stats.total_games);
    println!(
        "  Won:                 {} {}",
        stats.won,
        format!("({:.1}%)", stats.win_rate * 100.0).green()
    );
    if stats.lost > 0 {
        println!(
            "  Lost:                {} {}",
            stats.lost,
            format!("({:.1}%)", (1.0 - stats.win_rate) * 100.0).red()
        );
    }
    println!(
        "  Average wrong:       {}",
        format!("{:.3}", stats.average_wrong).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!("  Games/second:        {:.1}", stats.games_per_second);

    if stats.won > 0 {
        println!("\n📈 {}", "Wrong Guesses in Won Games".bright_cyan().bold());
        let max_wrong = stats.wrong_distribution.keys().copied().max().unwrap_or(0);
        let max_count = stats.wrong_distribution.values().copied().max().unwrap_or(1);
        for wrong in 0..=max_wrong {
            let count = stats.wrong_distribution.get(&wrong).copied().unwrap_or(0);
            let percentage = count as f64 / stats.won as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {wrong} wrong: {} {count:6} ({percentage:5.1}%)", bar.green());
        }
    }

    let total_steps: usize = stats.tier_usage.values().sum();
    if total_steps > 0 {
        println!("\n🧭 {}", "Guess Sources".bright_cyan().bold());
        for tier in Tier::ORDER {
            let count = stats.tier_usage.get(&tier).copied().unwrap_or(0);
            let percentage = count as f64 / total_steps as f64 * 100.0;
            println!("  {:<14} {count:8} ({percentage:5.1}%)", tier.name());
        }
    }

    if !stats.hardest_words.is_empty() {
        println!("\n🔴 {}", "Lost Words".red().bold());
        for word in &stats.hardest_words {
            println!("  {}", word.to_uppercase());
        }
    }

    println!("\n{}", "═".repeat(70));
}
