//! Store configuration from the environment.

use std::env;
use std::path::PathBuf;

use crate::file::JsonFileStore;

/// Default save file, relative to the working directory
pub const DEFAULT_SAVE_PATH: &str = "match_ten_saves.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub save_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl StoreConfig {
    /// Create from environment variables
    ///
    /// - `MATCH_TEN_SAVE_PATH`: JSON save file (default: `match_ten_saves.json`)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let save_path = var("MATCH_TEN_SAVE_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));

        Self { save_path }
    }

    /// Open the configured file, starting empty if it can't be read.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::open_or_empty(&self.save_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_vars() {
        let config = StoreConfig::from_vars(|_| None);
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn blank_path_falls_back() {
        let config = StoreConfig::from_vars(|_| Some("   ".to_string()));
        assert_eq!(config.save_path, PathBuf::from(DEFAULT_SAVE_PATH));
    }

    #[test]
    fn path_from_var() {
        let config = StoreConfig::from_vars(|name| {
            (name == "MATCH_TEN_SAVE_PATH").then(|| "/tmp/scores.json".to_string())
        });
        assert_eq!(config.save_path, PathBuf::from("/tmp/scores.json"));
    }
}
