//! Runtime configuration
//!
//! Settings resolved from the command line that every presentation layer shares.

use crate::core::{Difficulty, GameSession};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

/// Environment variable overriding the score file location
pub const SCORES_ENV: &str = "GUESS_NUMBER_SCORES";

/// Score file used when neither `--scores` nor the environment names one
pub const DEFAULT_SCORES_FILE: &str = "guess_number_scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub scores_path: PathBuf,
    /// Fixed seed for reproducible secrets; `None` seeds from the OS
    pub seed: Option<u64>,
    pub reject_duplicates: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
            seed: None,
            reject_duplicates: false,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(difficulty: Difficulty, scores_path: impl Into<PathBuf>) -> Self {
        Self {
            difficulty,
            scores_path: scores_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_duplicate_rejection(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }

    /// Random generator for secrets, seeded from the config when a seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Start a round at `difficulty` honoring the duplicate policy
    pub fn new_session(&self, difficulty: Difficulty, rng: &mut StdRng) -> GameSession {
        GameSession::start(difficulty.max_range(), rng)
            .with_duplicate_policy(self.reject_duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.scores_path, PathBuf::from(DEFAULT_SCORES_FILE));
        assert_eq!(config.seed, None);
        assert!(!config.reject_duplicates);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig::default().with_seed(Some(17));
        let a = config.new_session(Difficulty::Hard, &mut config.rng());
        let b = config.new_session(Difficulty::Hard, &mut config.rng());
        assert_eq!(a.secret(), b.secret());
        assert_eq!(a.max_range(), 500);
    }

    #[test]
    fn duplicate_policy_reaches_session() {
        let config = GameConfig::new(Difficulty::Easy, "scores.json")
            .with_seed(Some(3))
            .with_duplicate_rejection(true);
        let mut rng = config.rng();
        let mut session = config.new_session(Difficulty::Easy, &mut rng);

        let guess = if session.secret() == 1 { 2 } else { 1 };
        session.submit_guess(guess).unwrap();
        assert!(session.submit_guess(guess).is_err());
    }
}
