//! Headless play session.
//!
//! Tracks the board, the current two-tile selection, pair progress, the
//! countdown and the accumulated score across consecutive rounds on one tier.
//! The caller drives it with [`GameSession::select`] and
//! [`GameSession::tick`]; nothing here owns a timer or renders anything.

use crate::pairs::is_pair;
use crate::round::Round;
use crate::types::{Tile, TierParams, ROUND_CLEAR_BONUS};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    /// Every required pair was cleared
    Won,
    /// The countdown reached zero first
    TimedOut,
}

/// Result of a tile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Session not active, index out of range, or slot already cleared
    Ignored,
    Selected(usize),
    /// The pending selection was tapped again
    Deselected(usize),
    Matched(usize, usize),
    Mismatched(usize, usize),
    /// Matched the last required pair
    RoundCleared(usize, usize),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    params: TierParams,
    slots: Vec<Option<Tile>>,
    selected: Option<usize>,
    completed_pairs: u32,
    required_pairs: u32,
    remaining_ms: u32,
    score: i64,
    phase: SessionPhase,
}

impl GameSession {
    pub fn new(params: impl Into<TierParams>, round: Round) -> Self {
        let params = params.into();
        let mut session = Self {
            params,
            slots: Vec::new(),
            selected: None,
            completed_pairs: 0,
            required_pairs: 0,
            remaining_ms: 0,
            score: 0,
            phase: SessionPhase::Active,
        };
        session.load(round);
        session
    }

    /// Start the next round, keeping the accumulated score.
    pub fn next_round(&mut self, round: Round) {
        self.load(round);
    }

    fn load(&mut self, round: Round) {
        self.slots = round.tiles.into_iter().map(Some).collect();
        self.selected = None;
        self.completed_pairs = 0;
        self.required_pairs = round.available_pairs;
        self.remaining_ms = self.params.time_limit_ms();
        self.phase = SessionPhase::Active;
    }

    /// Tap the tile at `index`.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.phase != SessionPhase::Active {
            return SelectOutcome::Ignored;
        }
        let Some(second) = self.slots.get(index).copied().flatten() else {
            return SelectOutcome::Ignored;
        };

        let Some(first_index) = self.selected else {
            self.selected = Some(index);
            return SelectOutcome::Selected(index);
        };
        if first_index == index {
            self.selected = None;
            return SelectOutcome::Deselected(index);
        }

        self.selected = None;
        let Some(first) = self.slots[first_index] else {
            return SelectOutcome::Ignored;
        };
        if !is_pair(&first, &second) {
            return SelectOutcome::Mismatched(first_index, index);
        }

        self.slots[first_index] = None;
        self.slots[index] = None;
        self.completed_pairs += 1;

        if self.completed_pairs >= self.required_pairs {
            self.phase = SessionPhase::Won;
            self.score += ROUND_CLEAR_BONUS;
            SelectOutcome::RoundCleared(first_index, index)
        } else {
            SelectOutcome::Matched(first_index, index)
        }
    }

    /// Advance the countdown by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) -> SessionPhase {
        if self.phase == SessionPhase::Active {
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
            if self.remaining_ms == 0 {
                self.selected = None;
                self.phase = SessionPhase::TimedOut;
            }
        }
        self.phase
    }

    pub fn params(&self) -> &TierParams {
        &self.params
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Board slots; cleared tiles are `None`.
    pub fn slots(&self) -> &[Option<Tile>] {
        &self.slots
    }

    pub fn selection(&self) -> Option<usize> {
        self.selected
    }

    pub fn completed_pairs(&self) -> u32 {
        self.completed_pairs
    }

    pub fn required_pairs(&self) -> u32 {
        self.required_pairs
    }

    pub fn pairs_remaining(&self) -> u32 {
        self.required_pairs.saturating_sub(self.completed_pairs)
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Score worth persisting, if any.
    pub fn final_score(&self) -> Option<i64> {
        (self.score > 0).then_some(self.score)
    }
}
