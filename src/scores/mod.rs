//! Best-score persistence
//!
//! One record per process, loaded at startup and saved after each win.

mod error;
mod store;

pub use error::ScoreStoreError;
pub use store::ScoreStore;
