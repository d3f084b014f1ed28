//! Match Ten (workspace facade crate).
//!
//! Re-exports the workspace crates under stable paths
//! (`match_ten::{core, store, types}`) and hosts the headless autoplay used by
//! the `match-ten` binary.

pub mod play;

pub use match_ten_core as core;
pub use match_ten_store as store;
pub use match_ten_types as types;
