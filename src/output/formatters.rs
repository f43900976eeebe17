//! Formatting utilities for terminal output

use crate::core::{Proximity, closeness_percent};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Proximity meter for a guess `difference` away in a range of `max_range`
#[must_use]
pub fn proximity_bar(difference: u32, max_range: u32, width: usize) -> String {
    let percent = closeness_percent(difference, max_range);
    create_progress_bar(f64::from(percent), 100.0, width)
}

/// Emoji marker for a proximity tier
#[must_use]
pub const fn proximity_icon(proximity: Proximity) -> &'static str {
    match proximity {
        Proximity::Exact => "🎯",
        Proximity::VeryClose => "🔥",
        Proximity::Close => "🌡️",
        Proximity::Far => "🧊",
    }
}

/// Guess list as shown to the player, e.g. `[50, 25, 42]`
#[must_use]
pub fn format_attempts(attempts: &[u32]) -> String {
    let joined = attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// "1 attempt", "3 attempts"
#[must_use]
pub fn pluralize_attempts(count: usize) -> String {
    if count == 1 {
        "1 attempt".to_string()
    } else {
        format!("{count} attempts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn proximity_bar_fills_when_close() {
        assert_eq!(proximity_bar(0, 100, 10), "██████████");
        assert_eq!(proximity_bar(100, 100, 10), "░░░░░░░░░░");
        assert_eq!(proximity_bar(20, 100, 10), "████████░░");
    }

    #[test]
    fn attempts_list() {
        assert_eq!(format_attempts(&[]), "[]");
        assert_eq!(format_attempts(&[50, 25, 42]), "[50, 25, 42]");
    }

    #[test]
    fn attempts_plural() {
        assert_eq!(pluralize_attempts(1), "1 attempt");
        assert_eq!(pluralize_attempts(3), "3 attempts");
    }
}
