//! Command implementations

pub mod scores;
pub mod simple;
pub mod simulate;

pub use scores::reset_scores;
pub use simple::{RoundSummary, play_round, run_simple};
pub use simulate::{SimulationResult, run_simulation};
