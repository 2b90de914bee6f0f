//! Hangman Solver - CLI
//!
//! Suggests hangman guesses from a training dictionary, solves single words
//! locally and measures win rates over held-out words.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        guess_once, parse_display_pattern, run_simple, run_simulation, sample_secrets,
        solve_word, split_holdout,
    },
    core::GameConfig,
    output::{print_guess_result, print_simulation_stats, print_solve_result},
    solver::{EngineConfig, GuessEngine, SuppressionScope},
    wordlists::{TrainingData, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman letter guesser using candidate narrowing and substring frequencies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Training dictionary, one word per line
    #[arg(short, long, global = true, default_value = "words_250000_train.txt")]
    dictionary: String,

    /// Revealed share of common letters above which they are suppressed
    #[arg(short, long, global = true, default_value = "0.67")]
    threshold: f64,

    /// How long suppressed letters stay excluded: game (default) or turn
    #[arg(short, long, global = true, default_value = "game")]
    suppression: String,

    /// Wrong guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value = "6")]
    max_wrong: usize,

    /// Log engine decisions (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): suggest letters for a game played elsewhere
    Play,

    /// Suggest the next letter for a pattern
    Guess {
        /// Current pattern, '_' or '.' for hidden letters (e.g. "_pp_e")
        pattern: String,

        /// Letters already guessed (e.g. "aest" or "a,e,s,t")
        #[arg(short, long, default_value = "")]
        guessed: String,
    },

    /// Play a local game against a specific word
    Solve {
        /// The secret word
        word: String,

        /// Show the tier and candidate count of every turn
        #[arg(long)]
        trace: bool,
    },

    /// Play many local games and report the win rate
    Simulate {
        /// Secret words to play against; defaults to a held-out part of the dictionary
        #[arg(long)]
        test_words: Option<String>,

        /// Number of games to play
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Fraction of the dictionary held out as secrets
        #[arg(long, default_value = "0.1")]
        holdout: f64,

        /// Seed for shuffling, for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let engine_config = engine_config(&cli)?;
    let game_config = GameConfig {
        max_wrong_guesses: cli.max_wrong,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let data = load_training(&cli.dictionary)?;
            let mut engine = GuessEngine::new(&data, engine_config);
            run_simple(&mut engine, game_config)
        }
        Commands::Guess { pattern, guessed } => {
            let data = load_training(&cli.dictionary)?;
            let pattern = parse_display_pattern(&pattern)
                .with_context(|| format!("invalid pattern {pattern:?}"))?;
            let result = guess_once(&data, engine_config, pattern, &guessed)?;
            print_guess_result(&result);
            Ok(())
        }
        Commands::Solve { word, trace } => {
            let data = load_training(&cli.dictionary)?;
            let mut engine = GuessEngine::new(&data, engine_config);
            let record = solve_word(&mut engine, &word, game_config)?;
            print_solve_result(&record, trace);
            Ok(())
        }
        Commands::Simulate {
            test_words,
            count,
            holdout,
            seed,
            no_progress,
        } => run_simulate_command(
            &cli.dictionary,
            test_words.as_deref(),
            count,
            holdout,
            seed,
            !no_progress,
            &engine_config,
            game_config,
        ),
    }
}

fn engine_config(cli: &Cli) -> Result<EngineConfig> {
    let Some(suppression_scope) = SuppressionScope::from_name(&cli.suppression) else {
        bail!(
            "unknown suppression scope {:?}, expected 'game' or 'turn'",
            cli.suppression
        );
    };
    if !(0.0..=1.0).contains(&cli.threshold) {
        bail!("threshold must be between 0 and 1, got {}", cli.threshold);
    }

    Ok(EngineConfig {
        suppression_threshold: cli.threshold,
        suppression_scope,
        ..EngineConfig::default()
    })
}

fn load_training(path: &str) -> Result<TrainingData> {
    TrainingData::load(path).with_context(|| format!("loading dictionary {path}"))
}

#[allow(clippy::too_many_arguments)]
fn run_simulate_command(
    dictionary: &str,
    test_words: Option<&str>,
    count: Option<usize>,
    holdout: f64,
    seed: Option<u64>,
    show_progress: bool,
    engine_config: &EngineConfig,
    game_config: GameConfig,
) -> Result<()> {
    let (data, secrets) = if let Some(path) = test_words {
        let data = load_training(dictionary)?;
        let secrets =
            load_from_file(path).with_context(|| format!("loading test words {path}"))?;
        (data, secrets)
    } else {
        if !(0.0..1.0).contains(&holdout) {
            bail!("holdout must be in [0, 1), got {holdout}");
        }
        let words =
            load_from_file(dictionary).with_context(|| format!("loading dictionary {dictionary}"))?;
        let (training, test) = split_holdout(words, holdout, seed);
        if training.is_empty() {
            bail!("dictionary {dictionary} has no words left to train on");
        }
        (TrainingData::from_words(training), test)
    };

    let secrets = sample_secrets(secrets, count, seed);

    println!("\n{}", "═".repeat(70));
    println!(" Hangman Simulation ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTraining words: {}   Secrets: {}   Max wrong: {}",
        data.corpus().len(),
        secrets.len(),
        game_config.max_wrong_guesses
    );
    println!();

    let stats = run_simulation(&data, engine_config, &secrets, game_config, show_progress)?;
    print_simulation_stats(&stats);
    Ok(())
}
