//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic attached, making them usable
//! in any context (round generation, persistence, presentation layers).
//!
//! # Deck Composition
//!
//! A deck holds one tile for every (suit, value) combination:
//!
//! - **Suits**: 3 (Blossom, Lantern, Tide)
//! - **Values**: 1 through 9
//! - **Deck size**: 27 tiles
//!
//! # Difficulty Tiers
//!
//! | Tier | Name | Grid | Time limit | Pair range |
//! |------|------|------|------------|------------|
//! | `Relaxed` | Easy | 4x4 | 15s | 3..=6 |
//! | `Relentless` | Hard | 5x5 | 30s | 5..=10 |
//!
//! # Examples
//!
//! ```
//! use match_ten_types::{Difficulty, Suit, DECK_SIZE, PAIR_SUM};
//!
//! let tier = Difficulty::from_str("hard").unwrap();
//! assert_eq!(tier, Difficulty::Relentless);
//!
//! let params = tier.params();
//! assert_eq!(params.grid.cells(), 25);
//! assert_eq!(params.name, "Hard");
//!
//! assert_eq!(Suit::Tide.asset_name(7), "gsuu-7");
//! assert_eq!(DECK_SIZE, 27);
//! assert_eq!(PAIR_SUM, 10);
//! ```

use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Number of suits in a deck
pub const SUIT_COUNT: usize = 3;

/// Lowest tile value
pub const MIN_VALUE: u8 = 1;

/// Highest tile value
pub const MAX_VALUE: u8 = 9;

/// Tiles in a full deck (3 suits x 9 values)
pub const DECK_SIZE: usize = SUIT_COUNT * MAX_VALUE as usize;

/// Two tiles form a pair when their values add up to this
pub const PAIR_SUM: u8 = 10;

/// Resampling budget before round generation gives up on the pair range
pub const MAX_GENERATION_ATTEMPTS: u32 = 200;

/// Leaderboard capacity per difficulty tier
pub const SCORE_CAPACITY: usize = 20;

/// Namespace prefix for leaderboard storage keys
pub const SCORE_KEY_PREFIX: &str = "match_ten_saves";

/// Points awarded for clearing every pair of a round
pub const ROUND_CLEAR_BONUS: i64 = 10;


/// The three tile suits
///
/// Suits only affect presentation; pair validity depends on value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Blossom,
    Lantern,
    Tide,
}

impl Suit {
    /// All suits in deck order
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Blossom, Suit::Lantern, Suit::Tide];

    /// Asset prefix used by tile artwork
    pub fn asset_prefix(&self) -> &'static str {
        match self {
            Suit::Blossom => "jeiu",
            Suit::Lantern => "zghs",
            Suit::Tide => "gsuu",
        }
    }

    /// Artwork identifier for a tile of this suit, e.g. `jeiu-3`
    pub fn asset_name(&self, value: u8) -> String {
        format!("{}-{}", self.asset_prefix(), value)
    }
}

/// Opaque tile identity token
///
/// Allocated by whoever builds the deck; never reused within one allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

/// A single playable tile
///
/// Equality and hashing use `id` only, so two tiles with the same suit and
/// value stay distinct in sets and maps. Fields are private: every `Tile`
/// holds a value in `MIN_VALUE..=MAX_VALUE`.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    id: TileId,
    suit: Suit,
    value: u8,
}

impl Tile {
    /// Build a tile, rejecting values outside 1..=9.
    ///
    /// # Examples
    ///
    /// ```
    /// use match_ten_types::{Suit, Tile, TileError, TileId};
    ///
    /// assert_eq!(Tile::try_new(TileId(0), Suit::Tide, 9).map(|t| t.value()), Ok(9));
    /// assert_eq!(
    ///     Tile::try_new(TileId(1), Suit::Tide, 12),
    ///     Err(TileError::ValueOutOfRange { value: 12 })
    /// );
    /// ```
    pub fn try_new(id: TileId, suit: Suit, value: u8) -> Result<Self, TileError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(TileError::ValueOutOfRange { value });
        }
        Ok(Self { id, suit, value })
    }

    /// Build a tile from a value known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside 1..=9. Use [`Tile::try_new`] for
    /// untrusted input.
    pub fn new(id: TileId, suit: Suit, value: u8) -> Self {
        match Self::try_new(id, suit, value) {
            Ok(tile) => tile,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// 1..=9
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn asset_name(&self) -> String {
        self.suit.asset_name(self.value)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: u8,
    pub columns: u8,
}

impl GridSize {
    pub const fn new(rows: u8, columns: u8) -> Self {
        Self { rows, columns }
    }

    /// Total number of tile slots
    pub const fn cells(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Rejected tile construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("tile value {value} is outside 1..=9")]
    ValueOutOfRange { value: u8 },
}

/// Invalid tier configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_pairs ({min}) is greater than max_pairs ({max})")]
    InvertedPairRange { min: u32, max: u32 },
    #[error("max_pairs ({max}) exceeds the {limit} pairs a board can hold")]
    MaxPairsExceedsBoard { max: u32, limit: u32 },
    #[error("grid of {cells} cells does not fit in a 27-tile deck")]
    GridExceedsDeck { cells: usize },
}

/// Fixed parameters of a difficulty tier
///
/// Built-in tiers come from [`Difficulty::params`]; [`TierParams::custom`]
/// builds additional ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierParams {
    /// Display name, also used to derive the leaderboard key
    pub name: &'static str,
    pub grid: GridSize,
    pub time_limit_secs: u32,
    pub min_pairs: u32,
    pub max_pairs: u32,
}

impl TierParams {
    pub const fn custom(
        name: &'static str,
        grid: GridSize,
        time_limit_secs: u32,
        min_pairs: u32,
        max_pairs: u32,
    ) -> Self {
        Self {
            name,
            grid,
            time_limit_secs,
            min_pairs,
            max_pairs,
        }
    }

    /// Time limit in milliseconds
    pub const fn time_limit_ms(&self) -> u32 {
        self.time_limit_secs.saturating_mul(1000)
    }

    /// Whether a pair count satisfies this tier's target range
    pub fn accepts(&self, pairs: u32) -> bool {
        (self.min_pairs..=self.max_pairs).contains(&pairs)
    }

    /// Check `min_pairs <= max_pairs <= cells / 2` and that the grid fits the deck.
    ///
    /// Generation does not require valid params; out-of-range targets simply
    /// end up on the fallback path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = self.grid.cells();
        if cells > DECK_SIZE {
            return Err(ConfigError::GridExceedsDeck { cells });
        }
        if self.min_pairs > self.max_pairs {
            return Err(ConfigError::InvertedPairRange {
                min: self.min_pairs,
                max: self.max_pairs,
            });
        }
        let limit = (cells / 2) as u32;
        if self.max_pairs > limit {
            return Err(ConfigError::MaxPairsExceedsBoard {
                max: self.max_pairs,
                limit,
            });
        }
        Ok(())
    }
}

/// Built-in difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Relaxed,
    Relentless,
}

const RELAXED: TierParams = TierParams::custom("Easy", GridSize::new(4, 4), 15, 3, 6);
const RELENTLESS: TierParams = TierParams::custom("Hard", GridSize::new(5, 5), 30, 5, 10);

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Relaxed, Difficulty::Relentless];

    /// Fixed parameters for this tier
    pub const fn params(&self) -> TierParams {
        match self {
            Difficulty::Relaxed => RELAXED,
            Difficulty::Relentless => RELENTLESS,
        }
    }

    /// Player-facing name ("Easy" / "Hard")
    pub const fn display_name(&self) -> &'static str {
        self.params().name
    }

    /// Parse a tier by variant name or display name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match_ten_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("Easy"), Some(Difficulty::Relaxed));
    /// assert_eq!(Difficulty::from_str("relentless"), Some(Difficulty::Relentless));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" | "easy" => Some(Difficulty::Relaxed),
            "relentless" | "hard" => Some(Difficulty::Relentless),
            _ => None,
        }
    }
}

impl From<Difficulty> for TierParams {
    fn from(value: Difficulty) -> Self {
        value.params()
    }
}
