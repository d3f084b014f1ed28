//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the round generator, pair rules and play session.
//! It has **zero dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Testable**: Randomness is injected through [`RandomSource`]
//! - **Portable**: Can run behind any presentation layer (mobile, terminal, headless)
//!
//! # Module Structure
//!
//! - [`deck`]: 27-tile deck construction and tile id allocation
//! - [`pairs`]: Sum-to-ten validation and optimal pair counting
//! - [`rng`]: Injectable random sources (seeded LCG, `StdRng`)
//! - [`round`]: Rejection-sampling round generator with bounded fallback
//! - [`session`]: Selection, clearing, countdown and score for one play session
//!
//! # Game Rules
//!
//! - **Pairs**: Two tiles pair when their values sum to 10 (suit is irrelevant)
//! - **Rounds**: A board of `rows * columns` tiles drawn from a shuffled deck,
//!   resampled until its pair count lands in the tier's range (max 200 tries)
//! - **Scoring**: Clearing every counted pair before time runs out awards 10 points
//!
//! # Example
//!
//! ```
//! use match_ten_core::{GameSession, RoundGenerator, SimpleRng};
//! use match_ten_core::types::Difficulty;
//!
//! let mut generator = RoundGenerator::new(SimpleRng::new(12345));
//! let round = generator.build_round(Difficulty::Relaxed);
//! assert_eq!(round.tiles.len(), 16);
//!
//! let session = GameSession::new(Difficulty::Relaxed, round);
//! assert_eq!(session.score(), 0);
//! ```

pub mod deck;
pub mod pairs;
pub mod rng;
pub mod round;
pub mod session;

pub use match_ten_types as types;

// Re-export commonly used types for convenience
pub use deck::{build_deck, Deck, TileIdAllocator};
pub use pairs::{count_valid_pairs, is_pair, value_histogram};
pub use rng::{EntropyRng, RandomSource, SimpleRng};
pub use round::{Round, RoundGenerator};
pub use session::{GameSession, SelectOutcome, SessionPhase};
