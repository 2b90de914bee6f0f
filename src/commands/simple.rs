//! Simple interactive CLI mode
//!
//! The user plays hangman elsewhere; this loop suggests letters and reads
//! back the revealed pattern after each one.

use super::parse_display_pattern;
use crate::core::{GameConfig, Letter, Pattern};
use crate::solver::GuessEngine;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What the user reported after a suggested letter
#[derive(Debug, Clone, PartialEq, Eq)]
enum Feedback {
    /// The board changed; `hit` tells whether the suggested letter is on it
    Board { pattern: Pattern, hit: bool },
    /// The board is unchanged
    Miss,
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(engine: &mut GuessEngine<'_>, game_config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Hangman Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest a letter each turn. After guessing it, enter what the");
    println!("board shows now:\n");
    println!("  - The pattern, using _ or . for hidden letters (spaces are fine)");
    println!("  - Or 'miss' if the letter is not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    'games: loop {
        let Some(mut pattern) = read_word_length()? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        engine.reset();
        record_revealed(engine, &pattern);
        let mut wrong = 0;

        loop {
            let decision = match engine.decide(&pattern) {
                Ok(decision) => decision,
                Err(e) => {
                    println!("\n❌ {e}. Starting over.\n");
                    continue 'games;
                }
            };

            println!("────────────────────────────────────────────────────────────");
            println!(
                "Pattern {}   wrong guesses {wrong}/{}",
                pattern.to_string().bright_white().bold(),
                game_config.max_wrong_guesses
            );
            println!("────────────────────────────────────────────────────────────");
            println!(
                "\n📊 Suggested letter: {}",
                decision.letter.to_string().to_uppercase().bright_yellow().bold()
            );
            println!("   Source:       {} tier", decision.tier);
            println!("   Candidates:   {}", decision.candidates);
            if !decision.suppressed.is_empty() {
                println!("   Suppressed:   {}", decision.suppressed);
            }
            println!();

            if decision.candidates > 0 && decision.candidates <= 10 {
                println!("Remaining candidates:");
                for word in engine.candidates() {
                    println!("  • {}", word.text().to_uppercase());
                }
                println!();
            }

            engine.record_guess(decision.letter);
            match read_feedback(&pattern, decision.letter)? {
                Feedback::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Feedback::NewGame => {
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                Feedback::Miss => wrong += 1,
                Feedback::Board { pattern: next, hit } => {
                    if !hit {
                        wrong += 1;
                    }
                    record_revealed(engine, &next);
                    pattern = next;
                }
            }

            if pattern.is_complete() {
                println!("\n{}", "═".repeat(70).bright_cyan());
                println!(
                    "{}",
                    format!("    🎉  Solved {pattern} with {wrong} wrong guesses  🎉")
                        .bright_green()
                        .bold()
                );
                println!("{}\n", "═".repeat(70).bright_cyan());
                continue 'games;
            }
            if wrong >= game_config.max_wrong_guesses {
                println!("\n{}\n", "💀 Out of guesses!".red().bold());
                continue 'games;
            }
        }
    }
}

/// Mark every letter shown on the board as guessed
fn record_revealed(engine: &mut GuessEngine<'_>, pattern: &Pattern) {
    for &letter in pattern.cells().iter().flatten() {
        engine.record_guess(letter);
    }
}

/// Ask for the secret word's length; `None` means quit
fn read_word_length() -> Result<Option<Pattern>> {
    loop {
        let input = get_user_input("Word length (or a starting pattern)")?.to_lowercase();
        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(None),
            _ => {
                let parsed = match input.parse::<usize>() {
                    Ok(len) => Pattern::blank(len),
                    Err(_) => parse_display_pattern(&input),
                };
                match parsed {
                    Ok(pattern) => return Ok(Some(pattern)),
                    Err(e) => println!("❌ {e}\n"),
                }
            }
        }
    }
}

fn read_feedback(current: &Pattern, letter: Letter) -> Result<Feedback> {
    loop {
        let input = get_user_input("Board now (pattern, 'miss', or command)")?;
        match classify_feedback(&input, current, letter) {
            Ok(feedback) => return Ok(feedback),
            Err(message) => println!("❌ {message}\n"),
        }
    }
}

/// Interpret one line of user feedback against the board before the guess
///
/// A typed board equal to `current` is a miss. A board that hides or
/// changes a letter already shown is rejected.
fn classify_feedback(input: &str, current: &Pattern, letter: Letter) -> Result<Feedback, String> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Feedback::Quit),
        "new" | "n" => Ok(Feedback::NewGame),
        "miss" | "m" | "no" => Ok(Feedback::Miss),
        text => {
            let next = parse_display_pattern(text).map_err(|e| e.to_string())?;
            if next.len() != current.len() {
                return Err(format!(
                    "Expected {} cells, got {}",
                    current.len(),
                    next.len()
                ));
            }
            let consistent = current
                .cells()
                .iter()
                .zip(next.cells())
                .all(|(before, after)| before.is_none() || before == after);
            if !consistent {
                return Err(format!("{next} does not extend {current}"));
            }
            if next == *current {
                return Ok(Feedback::Miss);
            }
            let hit = next.cells().contains(&Some(letter));
            Ok(Feedback::Board { pattern: next, hit })
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;
    if read == 0 {
        // end of input
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
