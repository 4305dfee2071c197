//! JSON file persistence for a plan's stays.
//!
//! The file holds the stays as a JSON array in plan order. Each entry is
//! validated as it is read, so a hand-edited file cannot produce an invalid
//! stay; overlap between entries is caught by `Plan::restore`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shortstay_engine::Stay;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error accessing stay data at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stay data at {path} is not valid: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Storage handle for one plan file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored stays, or `None` if nothing has been stored yet.
    pub fn load(&self) -> Result<Option<Vec<Stay>>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored plan");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let stays: Vec<Stay> = serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = stays.len(), "loaded stays");
        Ok(Some(stays))
    }

    /// Replace the stored stays with `stays`.
    pub fn save(&self, stays: &[Stay]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(stays).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = stays.len(), "saved stays");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stay(name: &str, start: u32, end: u32) -> Stay {
        let d = |day| NaiveDate::from_ymd_opt(2026, 5, day).unwrap();
        Stay::new(name, d(start), d(end)).unwrap()
    }

    #[test]
    fn missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("stays.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn saved_stays_load_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("stays.json"));
        let stays = vec![stay("b", 20, 25), stay("a", 1, 5)];

        store.save(&stays).unwrap();

        assert_eq!(store.load().unwrap(), Some(stays));
    }

    #[test]
    fn invalid_stay_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stays.json");
        std::fs::write(
            &path,
            r#"[{"name":"x","start_date":"2026-01-01","end_date":"2026-06-01"}]"#,
        )
        .unwrap();

        let err = JsonStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
        assert!(err.to_string().contains("not valid"));
    }

    #[test]
    fn unreadable_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
