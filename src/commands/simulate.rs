//! Offline simulation - play many local games and report the win rate
//!
//! Games run in parallel. Each worker owns its own engine, and every engine
//! borrows the same training data.

use super::solve::{GameRecord, play_game};
use crate::core::{GameConfig, Word};
use crate::error::Result;
use crate::solver::{EngineConfig, GuessEngine, Tier};
use crate::wordlists::TrainingData;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationStats {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    /// Average wrong guesses over all games
    pub average_wrong: f64,
    /// Games won with exactly n wrong guesses
    pub wrong_distribution: FxHashMap<usize, usize>,
    /// Guesses produced by each tier
    pub tier_usage: FxHashMap<Tier, usize>,
    /// A few lost secrets, longest first
    pub hardest_words: Vec<String>,
    pub total_time: Duration,
    pub games_per_second: f64,
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Shuffle `words` and split off a held-out test set
///
/// Returns `(training, test)`. Test words that also occur in the training
/// part (duplicates in the source list) are dropped, so the two sets never
/// share a word.
#[must_use]
pub fn split_holdout(mut words: Vec<Word>, fraction: f64, seed: Option<u64>) -> (Vec<Word>, Vec<Word>) {
    words.shuffle(&mut rng_from(seed));

    let test_len = ((words.len() as f64) * fraction.clamp(0.0, 1.0)).round() as usize;
    let training = words.split_off(test_len);
    let seen: FxHashSet<&str> = training.iter().map(Word::text).collect();
    let test = words
        .into_iter()
        .filter(|w| !seen.contains(w.text()))
        .collect();

    (training, test)
}

/// Pick up to `count` secrets at random
#[must_use]
pub fn sample_secrets(mut words: Vec<Word>, count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    if let Some(count) = count {
        words.shuffle(&mut rng_from(seed));
        words.truncate(count);
    }
    words
}

/// Play one game per secret and aggregate the results
///
/// # Errors
///
/// Propagates the first engine failure other than running out of letters.
pub fn run_simulation(
    data: &TrainingData,
    engine_config: &EngineConfig,
    secrets: &[Word],
    game_config: GameConfig,
    show_progress: bool,
) -> Result<SimulationStats> {
    log::info!("simulating {} games", secrets.len());

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let records: Vec<GameRecord> = secrets
        .par_iter()
        .map_init(
            || GuessEngine::new(data, engine_config.clone()),
            |engine, secret| {
                let record = play_game(engine, secret.clone(), game_config);
                pb.inc(1);
                record
            },
        )
        .collect::<Result<_>>()?;
    pb.finish_with_message("Complete!");

    Ok(summarize(&records, start.elapsed()))
}

fn summarize(records: &[GameRecord], total_time: Duration) -> SimulationStats {
    let total_games = records.len();
    let won = records.iter().filter(|r| r.won).count();

    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut tier_usage: FxHashMap<Tier, usize> = FxHashMap::default();
    for record in records {
        if record.won {
            *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
        }
        for step in &record.steps {
            *tier_usage.entry(step.tier).or_insert(0) += 1;
        }
    }

    let mut hardest_words: Vec<String> = records
        .iter()
        .filter(|r| !r.won)
        .map(|r| r.secret.clone())
        .collect();
    hardest_words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    hardest_words.truncate(10);

    let ratio = |n: usize| {
        if total_games == 0 {
            0.0
        } else {
            n as f64 / total_games as f64
        }
    };

    SimulationStats {
        total_games,
        won,
        lost: total_games - won,
        win_rate: ratio(won),
        average_wrong: ratio(records.iter().map(|r| r.wrong_guesses).sum()),
        wrong_distribution,
        tier_usage,
        hardest_words,
        total_time,
        games_per_second: total_games as f64 / total_time.as_secs_f64().max(f64::EPSILON),
    }
}
