//! Scores command
//!
//! Shows or resets the persisted best scores.

use crate::scores::{ScoreStore, ScoreStoreError};
use log::info;
use std::path::Path;

/// Clear every recorded best and write the empty record back
///
/// # Errors
///
/// Returns an error if the emptied record cannot be written.
pub fn reset_scores(store: &mut ScoreStore, path: &Path) -> Result<(), ScoreStoreError> {
    store.clear();
    store.save(path)?;
    info!("reset best scores at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use tempfile::tempdir;

    #[test]
    fn reset_persists_empty_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Easy, 3);
        store.save(&path).unwrap();

        reset_scores(&mut store, &path).unwrap();

        assert!(store.is_empty());
        assert!(ScoreStore::load(&path).is_empty());
    }
}
