//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::SimulationResult;
use crate::core::Difficulty;
use crate::scores::ScoreStore;
use colored::Colorize;
use std::path::Path;

/// Print the best score for every difficulty
pub fn print_scores(store: &ScoreStore, path: &Path) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "BEST SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    for difficulty in Difficulty::ALL {
        let best = store.best(difficulty).map_or_else(
            || "-".bright_black().to_string(),
            |n| n.to_string().bright_yellow().bold().to_string(),
        );
        println!(
            "   {:<8} (1-{:<3})  {best}",
            difficulty.label(),
            difficulty.max_range()
        );
    }

    println!("\n   {}", format!("Stored in {}", path.display()).bright_black());
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!(
        "   Difficulty:       {} (1-{})",
        result.difficulty,
        result.difficulty.max_range()
    );
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&attempts, &count)| (attempts, count))
        .collect();
    counts.sort_unstable();

    // Long tails (linear/random on Hard) are folded into the last row
    let shown = 20;
    let tail: usize = counts.iter().skip(shown).map(|&(_, c)| c).sum();
    for &(attempts, count) in counts.iter().take(shown) {
        print_distribution_row(&attempts.to_string(), count, result.rounds);
    }
    if tail > 0 {
        print_distribution_row("more", tail, result.rounds);
    }
}

fn print_distribution_row(label: &str, count: usize, total: usize) {
    let pct = count as f64 / total as f64 * 100.0;
    let bar = create_progress_bar(pct, 100.0, 40);
    println!("   {label:>4}: {} {count:6} ({pct:5.1}%)", bar.green());
}
