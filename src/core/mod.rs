//! Core game types
//!
//! The round state machine, guess classification and hint helpers. Nothing in
//! here performs I/O; randomness is always passed in by the caller.

mod difficulty;
mod hints;
mod outcome;
mod session;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use hints::{Parity, Proximity, Trend, closeness_percent};
pub use outcome::{GuessOutcome, Verdict};
pub use session::{GameSession, GuessError};
