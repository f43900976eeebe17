//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::Bounds;
use rand::Rng;

/// A strategy for picking the next guess from the interval still possible
pub trait Strategy {
    /// Select a guess inside `bounds`
    ///
    /// Implementations must return a value `v` with `bounds.contains(v)`.
    fn select_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, rng: &mut R) -> u32;

    /// Short name shown in reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Binary search (default, optimal worst case)
    Bisection(BisectionStrategy),
    /// Uniform pick inside the remaining interval
    Random(RandomStrategy),
    /// Lowest remaining value
    Linear(LinearStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, rng: &mut R) -> u32 {
        match self {
            Self::Bisection(s) => s.select_guess(bounds, rng),
            Self::Random(s) => s.select_guess(bounds, rng),
            Self::Linear(s) => s.select_guess(bounds, rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Bisection(s) => s.name(),
            Self::Random(s) => s.name(),
            Self::Linear(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "bisection" (or "binary"), "random", "linear"
    /// Defaults to bisection if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "linear" => Self::Linear(LinearStrategy),
            _ => Self::Bisection(BisectionStrategy),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Bisection(BisectionStrategy)
    }
}

/// Always guesses the midpoint of the remaining interval
///
/// Wins within `ceil(log2(n + 1))` attempts for a range of size `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BisectionStrategy;

impl Strategy for BisectionStrategy {
    fn select_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, _rng: &mut R) -> u32 {
        bounds.midpoint()
    }

    fn name(&self) -> &'static str {
        "bisection"
    }
}

/// Random strategy
///
/// Picks uniformly inside the remaining interval, the way a casual player might.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, rng: &mut R) -> u32 {
        if bounds.width() <= 1 {
            return bounds.low;
        }
        rng.random_range(bounds.low..=bounds.high)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Counts up from the lowest value still possible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearStrategy;

impl Strategy for LinearStrategy {
    fn select_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, _rng: &mut R) -> u32 {
        bounds.low
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
