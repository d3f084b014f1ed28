//! JSON file backend.
//!
//! The whole store is one JSON object mapping keys to integer arrays, e.g.
//! `{"match_ten_saves_Easy": [90, 50, 10]}`. Every `set` rewrites the file
//! through a temporary sibling and a rename, so a crash mid-write leaves the
//! previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, warn};

use crate::kv::KeyValueStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt save file {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Vec<i64>>,
}

impl JsonFileStore {
    /// Load `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, entries })
    }

    /// Like [`JsonFileStore::open`], but unreadable or corrupt files start empty.
    ///
    /// The bad file is left on disk until the next successful write replaces it.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "starting with an empty score store");
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current contents to disk.
    pub fn flush(&self) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Vec<i64>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, values: &[i64]) {
        self.entries.insert(key.to_string(), values.to_vec());
        if let Err(e) = self.flush() {
            error!(error = %e, key, "failed to persist scores; keeping them in memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("saves.json")).unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("saves.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("match_ten_saves_Easy", &[90, 50, 10]);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("match_ten_saves_Easy"), Some(vec![90, 50, 10]));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saves.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn corrupt_file_recovers_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saves.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let mut store = JsonFileStore::open_or_empty(&path);
        assert_eq!(store.get("match_ten_saves_Hard"), None);

        store.set("match_ten_saves_Hard", &[5]);
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("match_ten_saves_Hard"), Some(vec![5]));
    }

    #[test]
    fn blank_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saves.json");
        fs::write(&path, "  \n").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("k"), None);
    }
}
