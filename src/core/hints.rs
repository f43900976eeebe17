//! Hints derived from a round
//!
//! All functions here are pure: they look at the secret, the range and the
//! guesses made, and never touch the session itself.

use std::cmp::Ordering;
use std::fmt;

/// How far the latest guess is from the secret, relative to the range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    Exact,
    VeryClose,
    Close,
    Far,
}

impl Proximity {
    /// Classify a distance using thresholds scaled to the range
    ///
    /// - very close: within 5% of the range (at least 1)
    /// - close: within 15% of the range (at least 2)
    ///
    /// # Examples
    /// ```
    /// use guess_number::core::Proximity;
    ///
    /// assert_eq!(Proximity::classify(0, 100), Proximity::Exact);
    /// assert_eq!(Proximity::classify(5, 100), Proximity::VeryClose);
    /// assert_eq!(Proximity::classify(15, 100), Proximity::Close);
    /// assert_eq!(Proximity::classify(16, 100), Proximity::Far);
    /// ```
    #[must_use]
    pub fn classify(difference: u32, max_range: u32) -> Self {
        let very_close = (max_range / 20).max(1);
        let close = (max_range.saturating_mul(3) / 20).max(2);

        if difference == 0 {
            Self::Exact
        } else if difference <= very_close {
            Self::VeryClose
        } else if difference <= close {
            Self::Close
        } else {
            Self::Far
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "spot on",
            Self::VeryClose => "very close",
            Self::Close => "close",
            Self::Far => "far",
        }
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the latest guess moved towards or away from the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Closer,
    Further,
    Same,
    /// Fewer than two guesses so far
    Unknown,
}

impl Trend {
    /// Compare the distances of the two most recent guesses
    ///
    /// # Examples
    /// ```
    /// use guess_number::core::Trend;
    ///
    /// assert_eq!(Trend::from_attempts(42, &[50]), Trend::Unknown);
    /// assert_eq!(Trend::from_attempts(42, &[50, 45]), Trend::Closer);
    /// assert_eq!(Trend::from_attempts(42, &[45, 60]), Trend::Further);
    /// ```
    #[must_use]
    pub fn from_attempts(secret: u32, attempts: &[u32]) -> Self {
        let [.., previous, latest] = attempts else {
            return Self::Unknown;
        };

        match latest.abs_diff(secret).cmp(&previous.abs_diff(secret)) {
            Ordering::Less => Self::Closer,
            Ordering::Greater => Self::Further,
            Ordering::Equal => Self::Same,
        }
    }

    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Closer => Some("🔥 You're getting closer!"),
            Self::Further => Some("❄️ You're moving away!"),
            Self::Same => Some("↔️ Same distance as before."),
            Self::Unknown => None,
        }
    }
}

/// Even/odd hint about the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub const fn of(secret: u32) -> Self {
        if secret % 2 == 0 { Self::Even } else { Self::Odd }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Even => "ℹ️ Hint: The secret number is EVEN.",
            Self::Odd => "ℹ️ Hint: The secret number is ODD.",
        }
    }
}

/// Fill level of the proximity meter, 100 meaning exact
///
/// # Examples
/// ```
/// use guess_number::core::closeness_percent;
///
/// assert_eq!(closeness_percent(0, 100), 100);
/// assert_eq!(closeness_percent(25, 100), 75);
/// assert_eq!(closeness_percent(100, 100), 0);
/// ```
#[must_use]
pub fn closeness_percent(difference: u32, max_range: u32) -> u16 {
    let range = u64::from(max_range.max(1));
    let missed = (u64::from(difference) * 100 / range).min(100);
    // Clamped to 0..=100 above
    (100 - missed) as u16
}
