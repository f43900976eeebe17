use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use super::error::ScoreStoreError;
use crate::core::Difficulty;

/// Fewest attempts ever needed to win, per difficulty
///
/// Persisted as a JSON object keyed by difficulty label:
///
/// ```json
/// {
///   "Easy": 4,
///   "Medium": 6
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreStore {
    best: BTreeMap<Difficulty, u32>,
}

impl ScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the record at `path`
    ///
    /// A missing, unreadable or malformed file yields an empty store; the
    /// problem is logged and play continues as a first run.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no score file at {}, starting fresh", path.display());
                return Self::new();
            }
            Err(err) => {
                warn!("could not read score file {}: {err}", path.display());
                return Self::new();
            }
        };

        match Self::from_json(&content) {
            Ok(store) => {
                debug!(
                    "loaded {} best score(s) from {}",
                    store.best.len(),
                    path.display()
                );
                store
            }
            Err(err) => {
                warn!(
                    "ignoring malformed score file {}: {err}",
                    path.display()
                );
                Self::new()
            }
        }
    }

    /// Parse the JSON record
    ///
    /// Unknown difficulty labels and zero attempt counts are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of non-negative integers.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, u32> = serde_json::from_str(content)?;

        let mut best = BTreeMap::new();
        for (label, attempts) in raw {
            match label.parse::<Difficulty>() {
                Ok(_) if attempts == 0 => {
                    warn!("skipping zero best score for '{label}'");
                }
                Ok(difficulty) => {
                    best.insert(difficulty, attempts);
                }
                Err(err) => warn!("skipping score entry: {err}"),
            }
        }

        Ok(Self { best })
    }

    /// Serialize the record as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.best)
    }

    /// Write the record to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written. The
    /// in-memory record is unaffected either way.
    pub fn save(&self, path: &Path) -> Result<(), ScoreStoreError> {
        let json = self
            .to_json()
            .map_err(|source| ScoreStoreError::serialize(path, source))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| {
                ScoreStoreError::io("creating score directory", parent, source)
            })?;
        }

        fs::write(path, json)
            .map_err(|source| ScoreStoreError::io("writing score file", path, source))?;

        debug!("saved best scores to {}", path.display());
        Ok(())
    }

    /// Record a win, returning `true` if it set a new best
    ///
    /// The stored value only ever decreases.
    ///
    /// # Examples
    /// ```
    /// use guess_number::core::Difficulty;
    /// use guess_number::scores::ScoreStore;
    ///
    /// let mut store = ScoreStore::new();
    /// assert!(store.record_win(Difficulty::Medium, 5));
    /// assert!(!store.record_win(Difficulty::Medium, 7));
    /// assert_eq!(store.best(Difficulty::Medium), Some(5));
    /// ```
    pub fn record_win(&mut self, difficulty: Difficulty, attempts: u32) -> bool {
        if attempts == 0 {
            return false;
        }

        match self.best.get(&difficulty) {
            Some(&best) if attempts >= best => false,
            previous => {
                info!(
                    "new best for {difficulty}: {attempts} (was {})",
                    previous.map_or_else(|| "none".to_string(), ToString::to_string)
                );
                self.best.insert(difficulty, attempts);
                true
            }
        }
    }

    #[must_use]
    pub fn best(&self, difficulty: Difficulty) -> Option<u32> {
        self.best.get(&difficulty).copied()
    }

    /// Recorded bests, easiest difficulty first
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, u32)> + '_ {
        self.best.iter().map(|(&d, &n)| (d, n))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn clear(&mut self) {
        self.best.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_win_sets_record() {
        let mut store = ScoreStore::new();
        assert!(store.record_win(Difficulty::Medium, 5));
        assert_eq!(store.best(Difficulty::Medium), Some(5));
    }

    #[test]
    fn worse_or_equal_win_keeps_record() {
        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Medium, 5);

        assert!(!store.record_win(Difficulty::Medium, 7));
        assert!(!store.record_win(Difficulty::Medium, 5));
        assert_eq!(store.best(Difficulty::Medium), Some(5));
    }

    #[test]
    fn better_win_lowers_record() {
        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Hard, 9);
        assert!(store.record_win(Difficulty::Hard, 8));
        assert_eq!(store.best(Difficulty::Hard), Some(8));
    }

    #[test]
    fn record_never_increases() {
        let mut store = ScoreStore::new();
        let mut lowest = u32::MAX;
        for attempts in [7, 3, 9, 3, 12, 2, 5, 2, 1, 4] {
            let set = store.record_win(Difficulty::Easy, attempts);
            assert_eq!(set, attempts < lowest);
            lowest = lowest.min(attempts);
            assert_eq!(store.best(Difficulty::Easy), Some(lowest));
        }
    }

    #[test]
    fn difficulties_are_independent() {
        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Easy, 3);
        store.record_win(Difficulty::Hard, 10);

        assert_eq!(store.best(Difficulty::Easy), Some(3));
        assert_eq!(store.best(Difficulty::Medium), None);
        assert_eq!(store.best(Difficulty::Hard), Some(10));
    }

    #[test]
    fn zero_attempts_never_recorded() {
        let mut store = ScoreStore::new();
        assert!(!store.record_win(Difficulty::Easy, 0));
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load_reproduces_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Easy, 4);
        store.record_win(Difficulty::Medium, 6);
        store.save(&path).unwrap();

        assert_eq!(ScoreStore::load(&path), store);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("scores.json");

        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Hard, 11);
        store.save(&path).unwrap();

        assert_eq!(ScoreStore::load(&path).best(Difficulty::Hard), Some(11));
    }

    #[test]
    fn saved_file_uses_labels() {
        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Medium, 6);
        let json = store.to_json().unwrap();
        assert!(json.contains("\"Medium\": 6"), "unexpected json: {json}");
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = ScoreStore::load(&dir.path().join("absent.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");

        for garbage in ["not json", "[1, 2, 3]", "{\"Easy\": \"four\"}", "{\"Easy\": -2}", ""] {
            fs::write(&path, garbage).unwrap();
            assert!(ScoreStore::load(&path).is_empty(), "accepted {garbage:?}");
        }
    }

    #[test]
    fn unknown_labels_and_zero_scores_skipped() {
        let store =
            ScoreStore::from_json(r#"{"easy": 3, "Impossible": 1, "Hard": 0}"#).unwrap();
        assert_eq!(store.iter().collect::<Vec<_>>(), vec![(Difficulty::Easy, 3)]);
    }

    #[test]
    fn save_to_directory_path_fails() {
        let dir = tempdir().unwrap();
        let store = ScoreStore::new();

        let err = store.save(dir.path()).unwrap_err();
        assert!(matches!(err, ScoreStoreError::Io { .. }));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Easy, 2);
        store.clear();
        assert!(store.is_empty());
        assert!(store.record_win(Difficulty::Easy, 9));
    }
}
