//! Per-tier leaderboard.

use crate::kv::KeyValueStore;
use crate::types::{Difficulty, TierParams, SCORE_CAPACITY, SCORE_KEY_PREFIX};

/// Storage key for a tier's leaderboard, e.g. `match_ten_saves_Easy`.
pub fn score_key(tier_name: &str) -> String {
    format!("{}_{}", SCORE_KEY_PREFIX, tier_name)
}

/// Best [`SCORE_CAPACITY`] scores per tier, highest first.
///
/// Reads and writes are plain read-modify-write against the backend; with
/// several writers on one key the last one wins.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ScoreStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Insert `score`, keep the top entries, persist and return the list.
    ///
    /// Any integer is accepted; callers decide whether a score is worth saving.
    pub fn record_score(&mut self, difficulty: Difficulty, score: i64) -> Vec<i64> {
        self.record_score_for(&difficulty.params(), score)
    }

    pub fn record_score_for(&mut self, params: &TierParams, score: i64) -> Vec<i64> {
        let key = score_key(params.name);
        let mut scores = self.backend.get(&key).unwrap_or_default();
        scores.push(score);
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(SCORE_CAPACITY);
        self.backend.set(&key, &scores);
        scores
    }

    /// Stored leaderboard, or an empty list if nothing was recorded.
    pub fn get_scores(&self, difficulty: Difficulty) -> Vec<i64> {
        self.get_scores_for(&difficulty.params())
    }

    pub fn get_scores_for(&self, params: &TierParams) -> Vec<i64> {
        self.backend
            .get(&score_key(params.name))
            .unwrap_or_default()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
