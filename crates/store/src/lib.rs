//! Score persistence module.
//!
//! Keeps a bounded, descending leaderboard per difficulty tier on top of a
//! two-method key-value contract, so the same logic runs against an
//! in-memory map in tests and a JSON file in real play.
//!
//! # Storage Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `match_ten_saves_Easy` | up to 20 integers, highest first |
//! | `match_ten_saves_Hard` | up to 20 integers, highest first |
//!
//! # Environment Variables
//!
//! - `MATCH_TEN_SAVE_PATH`: JSON save file (default: `match_ten_saves.json`)
//!
//! # Example
//!
//! ```
//! use match_ten_store::{MemoryStore, ScoreStore};
//! use match_ten_store::types::Difficulty;
//!
//! let mut scores = ScoreStore::new(MemoryStore::new());
//! scores.record_score(Difficulty::Relaxed, 50);
//! scores.record_score(Difficulty::Relaxed, 90);
//! assert_eq!(scores.get_scores(Difficulty::Relaxed), vec![90, 50]);
//! assert!(scores.get_scores(Difficulty::Relentless).is_empty());
//! ```

pub mod config;
pub mod file;
pub mod kv;
pub mod scores;

pub use match_ten_types as types;

pub use config::StoreConfig;
pub use file::{JsonFileStore, StoreError};
pub use kv::{KeyValueStore, MemoryStore};
pub use scores::{score_key, ScoreStore};
