//! Guess the Number - CLI
//!
//! Guessing game with TUI and CLI modes, persisted best scores and strategy
//! simulation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guess_number::{
    commands::{reset_scores, run_simple, run_simulation},
    config::{DEFAULT_SCORES_FILE, GameConfig, SCORES_ENV},
    core::Difficulty,
    output::{print_scores, print_simulation_result},
    scores::ScoreStore,
    solver::{Solver, Strategy, StrategyType},
};
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "guess_number",
    about = "Guess the secret number in as few attempts as you can",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (1-50), medium (1-100, default), hard (1-500)
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: Difficulty,

    /// File holding the best scores
    #[arg(long, global = true, env = SCORES_ENV, default_value = DEFAULT_SCORES_FILE)]
    scores: PathBuf,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Reject guesses already made this round instead of counting them
    #[arg(long, global = true)]
    no_repeats: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Classic prompt mode: type a guess, 0 for a hint
    Simple,

    /// Let a strategy play many rounds and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Strategy: bisection (default), random, linear
        #[arg(short, long, default_value = "bisection")]
        strategy: String,
    },

    /// Show the best score for each difficulty
    Scores {
        /// Forget all best scores
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.difficulty, cli.scores)
        .with_seed(cli.seed)
        .with_duplicate_rejection(cli.no_repeats);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(&config),
        Commands::Simulate { rounds, strategy } => {
            run_simulate_command(&config, rounds, &strategy)
        }
        Commands::Scores { reset } => run_scores_command(&config, reset),
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use guess_number::interactive::{App, run_tui};

    let store = ScoreStore::load(&config.scores_path);
    let app = App::new(config, store);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut store = ScoreStore::load(&config.scores_path);
    run_simple(config, &mut store)?;
    Ok(())
}

fn run_simulate_command(config: &GameConfig, rounds: usize, strategy_name: &str) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy);
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    println!(
        "Simulating {rounds} {} rounds with the {} strategy (seed {seed})...",
        config.difficulty,
        solver.strategy().name()
    );

    let result = run_simulation(&solver, config.difficulty, rounds, seed, true)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_scores_command(config: &GameConfig, reset: bool) -> Result<()> {
    let mut store = ScoreStore::load(&config.scores_path);

    if reset {
        reset_scores(&mut store, &config.scores_path)?;
        println!("Best scores cleared.");
    }

    print_scores(&store, &config.scores_path);
    Ok(())
}
