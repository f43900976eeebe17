//! Interval still consistent with the verdicts seen so far

use crate::core::Verdict;

/// Inclusive range `[low, high]` that must contain the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub low: u32,
    pub high: u32,
}

impl Bounds {
    /// Full range of a round: `[1, max_range]`
    #[must_use]
    pub fn new(max_range: u32) -> Self {
        Self {
            low: 1,
            high: max_range.max(1),
        }
    }

    /// Shrink the interval after `guess` received `verdict`
    ///
    /// # Examples
    /// ```
    /// use guess_number::core::Verdict;
    /// use guess_number::solver::Bounds;
    ///
    /// let mut bounds = Bounds::new(100);
    /// bounds.narrow(50, Verdict::TooHigh);
    /// assert_eq!(bounds, Bounds { low: 1, high: 49 });
    /// bounds.narrow(20, Verdict::TooLow);
    /// assert_eq!(bounds, Bounds { low: 21, high: 49 });
    /// ```
    pub fn narrow(&mut self, guess: u32, verdict: Verdict) {
        match verdict {
            Verdict::TooLow => self.low = self.low.max(guess.saturating_add(1)),
            Verdict::TooHigh => self.high = self.high.min(guess.saturating_sub(1)),
            Verdict::Correct => {
                self.low = guess;
                self.high = guess;
            }
        }
    }

    /// Midpoint, rounded down
    #[inline]
    #[must_use]
    pub const fn midpoint(&self) -> u32 {
        self.low + (self.high - self.low) / 2
    }

    /// Number of values still possible
    #[must_use]
    pub const fn width(&self) -> u32 {
        if self.high < self.low {
            0
        } else {
            self.high - self.low + 1
        }
    }

    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.low && value <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_keeps_secret_inside() {
        let secret = 73;
        let mut bounds = Bounds::new(100);
        for guess in [50, 90, 70, 80, 75, 72, 74] {
            bounds.narrow(guess, Verdict::classify(guess, secret));
            assert!(bounds.contains(secret), "{bounds:?} lost {secret}");
        }
        assert_eq!(bounds, Bounds { low: 73, high: 73 });
    }

    #[test]
    fn correct_collapses_interval() {
        let mut bounds = Bounds::new(10);
        bounds.narrow(4, Verdict::Correct);
        assert_eq!(bounds.width(), 1);
        assert_eq!(bounds.midpoint(), 4);
    }

    #[test]
    fn width_of_full_range() {
        assert_eq!(Bounds::new(500).width(), 500);
        assert_eq!(Bounds::new(0).width(), 1);
    }
}
