//! Interactive TUI interface
//!
//! Full-screen game with keyboard shortcuts, a proximity meter, guess history
//! and best scores.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
