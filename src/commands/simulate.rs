//! Simulate command
//!
//! Plays many rounds with an automated strategy and reports attempt statistics.

use crate::core::{Difficulty, GameSession, GuessError};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub strategy: &'static str,
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play `rounds` rounds at `difficulty`
///
/// Round `i` uses a generator seeded with `seed + i`, so a run is fully
/// reproducible from its seed regardless of thread scheduling.
///
/// # Errors
///
/// Returns an error if the strategy submits a guess the session rejects.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation<S: Strategy + Sync>(
    solver: &Solver<S>,
    difficulty: Difficulty,
    rounds: usize,
    seed: u64,
    show_progress: bool,
) -> Result<SimulationResult, GuessError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message(format!("{} on {difficulty}", solver.strategy().name()));
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let attempts: Vec<usize> = (0..rounds)
        .into_par_iter()
        .map(|i| -> Result<usize, GuessError> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let session = GameSession::start(difficulty.max_range(), &mut rng);
            let result = solver.play_round(session, &mut rng)?;
            pb.inc(1);
            Ok(result.attempts())
        })
        .collect::<Result<Vec<usize>, GuessError>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &n in &attempts {
        *distribution.entry(n).or_insert(0) += 1;
    }

    let total_attempts: usize = attempts.iter().sum();
    let average_attempts = if rounds > 0 {
        total_attempts as f64 / rounds as f64
    } else {
        0.0
    };

    debug!(
        "simulated {rounds} rounds of {difficulty} with {} in {:.2}s",
        solver.strategy().name(),
        duration.as_secs_f64()
    );

    Ok(SimulationResult {
        strategy: solver.strategy().name(),
        difficulty,
        rounds,
        total_attempts,
        average_attempts,
        min_attempts: attempts.iter().copied().min().unwrap_or(0),
        max_attempts: attempts.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
