//! Persistent storage collaborator for the price history
//!
//! The history lives in a single JSON file. Loading never fails: a missing
//! file yields an empty ledger and a corrupt or schema-mismatched blob is
//! discarded with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::PriceHistory;

const HISTORY_FILE: &str = "price_history.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write history file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed store for the price history ledger
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Store rooted at the given data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        HistoryStore {
            path: data_dir.as_ref().join(HISTORY_FILE),
        }
    }

    /// Store rooted at `TRIPQUOTE_DATA_DIR`, defaulting to `./data`
    pub fn from_env() -> Self {
        let data_dir = std::env::var("TRIPQUOTE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self::new(data_dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted ledger, re-capped to `capacity`.
    ///
    /// Decoding failures are recovered locally by starting from an empty
    /// ledger; they are never propagated.
    pub fn load<P: DeserializeOwned>(&self, capacity: usize) -> PriceHistory<P> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No history file at {}, starting empty", self.path.display());
                return PriceHistory::new(capacity);
            }
            Err(e) => {
                warn!(
                    "Could not read history file {}: {}. Starting empty.",
                    self.path.display(),
                    e
                );
                return PriceHistory::new(capacity);
            }
        };

        match serde_json::from_str::<PriceHistory<P>>(&raw) {
            Ok(mut history) => {
                history.recap(capacity);
                debug!(
                    "Loaded {} history entr(ies) from {}",
                    history.len(),
                    self.path.display()
                );
                history
            }
            Err(e) => {
                warn!(
                    "Discarding corrupt history file {}: {}. Starting empty.",
                    self.path.display(),
                    e
                );
                PriceHistory::new(capacity)
            }
        }
    }

    /// Persist the full ledger, creating the data directory if needed
    pub fn save<P: Serialize>(&self, history: &PriceHistory<P>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Observation, DEFAULT_CAPACITY};
    use chrono::Utc;

    #[test]
    fn test_missing_file_yields_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        let history: PriceHistory<String> = store.load(DEFAULT_CAPACITY);
        assert!(history.is_empty());
        assert_eq!(history.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());

        let mut history: PriceHistory<String> = PriceHistory::new(DEFAULT_CAPACITY);
        history.append(Observation::new(Utc::now(), 420.0, "quote".to_string()));
        history.append(Observation::new(Utc::now(), 399.5, "quote2".to_string()));

        store.save(&history).unwrap();
        let loaded: PriceHistory<String> = store.load(DEFAULT_CAPACITY);
        assert_eq!(history, loaded);
    }

    #[test]
    fn test_corrupt_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        fs::write(store.path(), "{ this is not json").unwrap();

        let history: PriceHistory<String> = store.load(DEFAULT_CAPACITY);
        assert!(history.is_empty());
    }

    #[test]
    fn test_schema_mismatch_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        fs::write(store.path(), r#"{"totally": "different"}"#).unwrap();

        let history: PriceHistory<String> = store.load(DEFAULT_CAPACITY);
        assert!(history.is_empty());
    }

    #[test]
    fn test_oversized_blob_recapped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());

        let mut history: PriceHistory<u32> = PriceHistory::new(10);
        for i in 0..10 {
            history.append(Observation::new(Utc::now(), i as f64, i));
        }
        store.save(&history).unwrap();

        let loaded: PriceHistory<u32> = store.load(DEFAULT_CAPACITY);
        assert_eq!(loaded.len(), DEFAULT_CAPACITY);
        // oldest entries were dropped
        assert_eq!(loaded.entries().next().unwrap().payload, 3);
    }
}
