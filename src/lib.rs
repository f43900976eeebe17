//! Guess the Number
//!
//! A guessing game: a secret is drawn from a difficulty's range, the player
//! guesses until they find it, and the fewest attempts per difficulty are kept.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_number::core::{GameSession, Verdict};
//!
//! let mut session = GameSession::with_secret(100, 42);
//! assert_eq!(session.submit_guess(50).unwrap().verdict, Verdict::TooHigh);
//! assert_eq!(session.submit_guess(25).unwrap().verdict, Verdict::TooLow);
//!
//! let outcome = session.submit_guess(42).unwrap();
//! assert!(outcome.is_correct());
//! assert_eq!(outcome.attempts, 3);
//! ```

// Core domain types
pub mod core;

// Best-score persistence
pub mod scores;

// Runtime settings
pub mod config;

// Automated guessing strategies
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
