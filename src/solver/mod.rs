//! Automated guessing
//!
//! Strategies that play a round on their own, used by the simulate command.

mod bounds;
mod engine;
pub mod strategy;

pub use bounds::Bounds;
pub use engine::{RoundResult, Solver};
pub use strategy::{BisectionStrategy, LinearStrategy, RandomStrategy, Strategy, StrategyType};
