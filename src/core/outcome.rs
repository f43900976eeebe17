//! Guess classification
//!
//! Every accepted guess produces a [`GuessOutcome`]: the verdict, the distance
//! to the secret and the attempt count including this guess.

use std::cmp::Ordering;

/// How a guess compares to the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    TooLow,
    TooHigh,
    Correct,
}

impl Verdict {
    /// Classify `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use guess_number::core::Verdict;
    ///
    /// assert_eq!(Verdict::classify(50, 42), Verdict::TooHigh);
    /// assert_eq!(Verdict::classify(25, 42), Verdict::TooLow);
    /// assert_eq!(Verdict::classify(42, 42), Verdict::Correct);
    /// ```
    #[must_use]
    pub fn classify(guess: u32, secret: u32) -> Self {
        match guess.cmp(&secret) {
            Ordering::Less => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
            Ordering::Equal => Self::Correct,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Direction the player should move next
    #[must_use]
    pub const fn direction(self) -> &'static str {
        match self {
            Self::TooLow => "Higher!",
            Self::TooHigh => "Lower!",
            Self::Correct => "Correct!",
        }
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub verdict: Verdict,
    /// `|guess - secret|`
    pub difference: u32,
    /// Attempts used so far, this guess included
    pub attempts: usize,
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_orders() {
        assert_eq!(Verdict::classify(1, 100), Verdict::TooLow);
        assert_eq!(Verdict::classify(100, 1), Verdict::TooHigh);
        assert_eq!(Verdict::classify(7, 7), Verdict::Correct);
    }

    #[test]
    fn direction_points_towards_secret() {
        assert_eq!(Verdict::TooLow.direction(), "Higher!");
        assert_eq!(Verdict::TooHigh.direction(), "Lower!");
    }

    #[test]
    fn outcome_correctness_follows_verdict() {
        let outcome = GuessOutcome {
            verdict: Verdict::Correct,
            difference: 0,
            attempts: 3,
        };
        assert!(outcome.is_correct());
        assert!(!Verdict::TooLow.is_correct());
    }
}
