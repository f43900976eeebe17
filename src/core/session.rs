//! A single round of the guessing game
//!
//! A `GameSession` owns the secret and the guesses made so far. Sessions are
//! never reused: starting a new round means building a new session.

use super::outcome::{GuessOutcome, Verdict};
use rand::Rng;
use thiserror::Error;

/// Reasons a guess is rejected without counting as an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The round is already won; the caller must start a new session
    #[error("the round is over; start a new round before guessing again")]
    Inactive,
    #[error("{value} is out of range, guess a number between 1 and {max}")]
    OutOfRange { value: i64, max: u32 },
    #[error("you already guessed {0}")]
    Duplicate(u32),
}

/// State of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: u32,
    max_range: u32,
    attempts: Vec<u32>,
    active: bool,
    reject_duplicates: bool,
}

impl GameSession {
    /// Start a round with a secret drawn uniformly from `[1, max_range]`
    ///
    /// A `max_range` of zero is treated as 1.
    ///
    /// # Examples
    /// ```
    /// use guess_number::core::GameSession;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = GameSession::start(100, &mut rng);
    /// assert!((1..=100).contains(&session.secret()));
    /// assert!(session.is_active());
    /// ```
    pub fn start<R: Rng + ?Sized>(max_range: u32, rng: &mut R) -> Self {
        let max_range = max_range.max(1);
        let secret = rng.random_range(1..=max_range);
        Self::with_secret(max_range, secret)
    }

    /// Start a round with a known secret, clamped into `[1, max_range]`
    #[must_use]
    pub fn with_secret(max_range: u32, secret: u32) -> Self {
        let max_range = max_range.max(1);
        Self {
            secret: secret.clamp(1, max_range),
            max_range,
            attempts: Vec::new(),
            active: true,
            reject_duplicates: false,
        }
    }

    /// Reject guesses that repeat an earlier guess of this round
    #[must_use]
    pub fn with_duplicate_policy(mut self, reject_duplicates: bool) -> Self {
        self.reject_duplicates = reject_duplicates;
        self
    }

    /// Submit a guess
    ///
    /// # Errors
    /// - [`GuessError::Inactive`] if the round was already won
    /// - [`GuessError::OutOfRange`] if `value` is outside `[1, max_range]`
    /// - [`GuessError::Duplicate`] if duplicates are rejected and `value` was
    ///   already guessed
    ///
    /// Rejected guesses never count as attempts.
    pub fn submit_guess(&mut self, value: i64) -> Result<GuessOutcome, GuessError> {
        if !self.active {
            return Err(GuessError::Inactive);
        }

        let guess = u32::try_from(value)
            .ok()
            .filter(|v| (1..=self.max_range).contains(v))
            .ok_or(GuessError::OutOfRange {
                value,
                max: self.max_range,
            })?;

        if self.reject_duplicates && self.attempts.contains(&guess) {
            return Err(GuessError::Duplicate(guess));
        }

        self.attempts.push(guess);
        let verdict = Verdict::classify(guess, self.secret);
        if verdict.is_correct() {
            self.active = false;
        }

        Ok(GuessOutcome {
            verdict,
            difference: guess.abs_diff(self.secret),
            attempts: self.attempts.len(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> u32 {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn max_range(&self) -> u32 {
        self.max_range
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[u32] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// True once the secret has been guessed
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.active && self.attempts.last() == Some(&self.secret)
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<u32> {
        self.attempts.last().copied()
    }

    /// Distance between the latest guess and the secret
    #[must_use]
    pub fn last_difference(&self) -> Option<u32> {
        self.last_guess().map(|g| g.abs_diff(self.secret))
    }
}
