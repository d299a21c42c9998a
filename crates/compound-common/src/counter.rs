//! Per-project daily tool-call counter.
//!
//! The counter lives at `.agent/.tool-call-count` under the project root as
//! a single small JSON record. One epoch per calendar day: a record whose
//! `date` differs from today's key reads back as a fresh zero count.

use crate::fs::atomic_write;
use crate::time::today;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Hidden project-local directory holding hook bookkeeping.
pub const AGENT_DIR: &str = ".agent";
/// Counter record file name inside [`AGENT_DIR`].
pub const COUNTER_FILE: &str = ".tool-call-count";

/// The persisted counter record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Qualifying tool calls observed since the last epoch rollover.
    pub count: u64,
    /// Local calendar-day key the count belongs to.
    pub date: String,
}

impl CounterState {
    /// Zero count for the given day key.
    pub fn fresh(date: impl Into<String>) -> Self {
        Self {
            count: 0,
            date: date.into(),
        }
    }
}

/// Why a raw counter read failed. Callers treat every variant as "no
/// record"; the distinction only exists for logging.
#[derive(Debug, Error)]
pub enum CounterReadError {
    #[error("failed to read counter record: {0}")]
    Read(#[from] io::Error),
    #[error("malformed counter record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Storage boundary for the counter record.
///
/// Injected into the suggest-compact hook so the reminder decision stays
/// testable without touching the filesystem.
pub trait CounterStore {
    /// Load the counter for the current epoch. Never fails visibly: a
    /// missing, unreadable, or malformed record, and a record from a past
    /// day, all resolve to a fresh `{count: 0, date: today}`.
    fn load(&self) -> CounterState;

    /// Persist the record, overwriting any prior one.
    fn save(&self, state: &CounterState) -> io::Result<()>;
}

/// File-backed [`CounterStore`] rooted at a project working directory.
pub struct FileCounterStore {
    path: PathBuf,
}

impl FileCounterStore {
    pub fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(AGENT_DIR).join(COUNTER_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the record without any epoch handling.
    fn load_raw(&self) -> Result<CounterState, CounterReadError> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl CounterStore for FileCounterStore {
    fn load(&self) -> CounterState {
        let today = today();
        match self.load_raw() {
            Ok(state) if state.date == today => state,
            // Past-day record: fresh epoch.
            Ok(_) => CounterState::fresh(today),
            Err(e) => {
                debug!("treating counter record as absent: {e}");
                CounterState::fresh(today)
            }
        }
    }

    fn save(&self, state: &CounterState) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        atomic_write(&self.path, json.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_record_loads_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCounterStore::new(dir.path());
        let state = store.load();
        assert_eq!(state.count, 0);
        assert_eq!(state.date, today());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCounterStore::new(dir.path());
        store
            .save(&CounterState {
                count: 7,
                date: today(),
            })
            .unwrap();
        assert_eq!(store.load().count, 7);
    }

    #[test]
    fn save_creates_agent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCounterStore::new(dir.path());
        store.save(&CounterState::fresh(today())).unwrap();
        assert!(dir.path().join(AGENT_DIR).is_dir());
        assert!(store.path().is_file());
    }

    #[test]
    fn stale_date_loads_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCounterStore::new(dir.path());
        store
            .save(&CounterState {
                count: 42,
                date: "1999-12-31".to_string(),
            })
            .unwrap();
        let state = store.load();
        assert_eq!(state.count, 0);
        assert_eq!(state.date, today());
    }

    #[test]
    fn malformed_record_loads_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCounterStore::new(dir.path());
        fs::create_dir_all(dir.path().join(AGENT_DIR)).unwrap();
        fs::write(store.path(), "not valid json!!!").unwrap();
        let state = store.load();
        assert_eq!(state.count, 0);
        assert_eq!(state.date, today());
    }

    #[test]
    fn read_errors_distinguish_missing_from_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCounterStore::new(dir.path());

        let missing = store.load_raw().unwrap_err();
        assert!(matches!(missing, CounterReadError::Read(_)));
        assert!(missing.to_string().contains("failed to read counter record"));

        fs::create_dir_all(dir.path().join(AGENT_DIR)).unwrap();
        fs::write(store.path(), "{broken").unwrap();
        let malformed = store.load_raw().unwrap_err();
        assert!(matches!(malformed, CounterReadError::Parse(_)));
        assert!(malformed.to_string().contains("malformed counter record"));
    }

    #[test]
    fn record_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCounterStore::new(dir.path());
        store
            .save(&CounterState {
                count: 3,
                date: "2026-08-30".to_string(),
            })
            .unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"count":3,"date":"2026-08-30"}"#);
    }
}
