//! Headless autoplay.
//!
//! Plays consecutive rounds the way a perfect player would: every tap costs a
//! fixed slice of the countdown, every counted pair gets cleared, and the
//! session's score is recorded when it ends.

use std::env;

use tracing::info;

use crate::core::{is_pair, GameSession, RandomSource, RoundGenerator, SessionPhase};
use crate::store::{KeyValueStore, ScoreStore};
use crate::types::Difficulty;

/// Countdown consumed by each simulated tap
pub const TAP_MS: u32 = 250;

/// Autoplay settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub rounds: u32,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Relaxed,
            seed: None,
            rounds: 3,
        }
    }
}

impl PlayConfig {
    /// Create from environment variables
    ///
    /// - `MATCH_TEN_DIFFICULTY`: `easy`/`relaxed` or `hard`/`relentless` (default: easy)
    /// - `MATCH_TEN_SEED`: u64 seed (default: OS entropy)
    /// - `MATCH_TEN_ROUNDS`: rounds to play (default: 3)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let difficulty = var("MATCH_TEN_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or(defaults.difficulty);
        let seed = var("MATCH_TEN_SEED").and_then(|s| s.trim().parse().ok());
        let rounds = var("MATCH_TEN_ROUNDS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.rounds);

        Self {
            difficulty,
            seed,
            rounds,
        }
    }
}

/// What happened during an autoplay session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub fallback_rounds: u32,
    pub score: i64,
    /// Leaderboard after recording; `None` if there was nothing to record
    pub leaderboard: Option<Vec<i64>>,
}

/// Play up to `rounds` rounds, stopping early if one times out.
pub fn autoplay<R, S>(
    generator: &mut RoundGenerator<R>,
    scores: &mut ScoreStore<S>,
    difficulty: Difficulty,
    rounds: u32,
) -> PlayReport
where
    R: RandomSource,
    S: KeyValueStore,
{
    let mut report = PlayReport {
        rounds_played: 0,
        rounds_won: 0,
        fallback_rounds: 0,
        score: 0,
        leaderboard: None,
    };
    let mut current: Option<GameSession> = None;

    for _ in 0..rounds {
        let round = generator.build_round(difficulty);
        if round.used_fallback {
            report.fallback_rounds += 1;
        }
        let mut session = match current.take() {
            Some(mut s) => {
                s.next_round(round);
                s
            }
            None => GameSession::new(difficulty, round),
        };

        report.rounds_played += 1;
        let phase = clear_board(&mut session);
        info!(
            tier = difficulty.display_name(),
            round = report.rounds_played,
            cleared = session.completed_pairs(),
            required = session.required_pairs(),
            ?phase,
            "round finished"
        );
        current = Some(session);

        if phase != SessionPhase::Won {
            break;
        }
        report.rounds_won += 1;
    }

    if let Some(session) = &current {
        report.score = session.score();
        report.leaderboard = session
            .final_score()
            .map(|score| scores.record_score(difficulty, score));
    }
    report
}

/// Tap pairs until the round is won or the clock runs out.
fn clear_board(session: &mut GameSession) -> SessionPhase {
    while session.phase() == SessionPhase::Active {
        let Some((a, b)) = find_pair(session) else {
            // Nothing left to match: wait out the timer.
            return session.tick(session.remaining_ms());
        };
        for index in [a, b] {
            session.select(index);
            if session.tick(TAP_MS) != SessionPhase::Active {
                break;
            }
        }
    }
    session.phase()
}

fn find_pair(session: &GameSession) -> Option<(usize, usize)> {
    let slots = session.slots();
    slots.iter().enumerate().find_map(|(i, a)| {
        let a = a.as_ref()?;
        slots
            .iter()
            .enumerate()
            .skip(i + 1)
            .find(|(_, b)| b.as_ref().is_some_and(|b| is_pair(a, b)))
            .map(|(j, _)| (i, j))
    })
}
