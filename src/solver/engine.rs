//! Automated player

use super::{Bounds, strategy::Strategy};
use crate::core::{GameSession, GuessError};
use rand::Rng;

/// Outcome of a round played by the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub secret: u32,
    pub guesses: Vec<u32>,
}

impl RoundResult {
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }
}

/// Plays rounds to completion with a given strategy
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Guess until the session is won
    ///
    /// Consumes the session: a finished round is never reused.
    ///
    /// # Errors
    ///
    /// Returns the session's error if a guess is rejected, which only happens
    /// when the session was already finished or the strategy broke its bounds.
    pub fn play_round<R: Rng + ?Sized>(
        &self,
        mut session: GameSession,
        rng: &mut R,
    ) -> Result<RoundResult, GuessError> {
        let mut bounds = Bounds::new(session.max_range());

        loop {
            let guess = self.strategy.select_guess(&bounds, rng);
            let outcome = session.submit_guess(i64::from(guess))?;
            bounds.narrow(guess, outcome.verdict);

            if outcome.is_correct() {
                return Ok(RoundResult {
                    secret: session.secret(),
                    guesses: session.attempts().to_vec(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{BisectionStrategy, LinearStrategy, RandomStrategy};
    use rand::{SeedableRng, rngs::StdRng};

    fn log2_ceil(n: u32) -> usize {
        // ceil(log2(n + 1))
        (u32::BITS - n.leading_zeros()) as usize
    }

    #[test]
    fn bisection_bounded_by_log2() {
        let solver = Solver::new(BisectionStrategy);
        let mut rng = StdRng::seed_from_u64(0);

        for max in [1, 2, 7, 50, 100] {
            for secret in 1..=max {
                let result = solver
                    .play_round(GameSession::with_secret(max, secret), &mut rng)
                    .unwrap();
                assert_eq!(result.secret, secret);
                assert_eq!(result.guesses.last(), Some(&secret));
                assert!(
                    result.attempts() <= log2_ceil(max),
                    "secret {secret} of {max} took {}",
                    result.attempts()
                );
            }
        }
    }

    #[test]
    fn linear_takes_secret_attempts() {
        let solver = Solver::new(LinearStrategy);
        let mut rng = StdRng::seed_from_u64(0);
        let result = solver
            .play_round(GameSession::with_secret(50, 17), &mut rng)
            .unwrap();
        assert_eq!(result.attempts(), 17);
    }

    #[test]
    fn random_always_finishes() {
        let solver = Solver::new(RandomStrategy);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let session = GameSession::start(500, &mut rng);
            let secret = session.secret();
            let result = solver.play_round(session, &mut rng).unwrap();
            assert_eq!(result.secret, secret);
            assert!(result.attempts() <= 500);
        }
    }

    #[test]
    fn finished_session_is_rejected() {
        let solver = Solver::new(BisectionStrategy);
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = GameSession::with_secret(10, 5);
        session.submit_guess(5).unwrap();

        assert_eq!(
            solver.play_round(session, &mut rng),
            Err(GuessError::Inactive)
        );
    }
}
