//! Deck construction.
//!
//! A deck is one tile per (suit, value) combination, laid out suit-major:
//! Blossom 1..=9, then Lantern 1..=9, then Tide 1..=9. Decks are stack-only.

use arrayvec::ArrayVec;

use crate::types::{Suit, Tile, TileId, DECK_SIZE, MAX_VALUE, MIN_VALUE};

/// A full 27-tile deck.
pub type Deck = ArrayVec<Tile, DECK_SIZE>;

/// Hands out tile ids that never repeat for the lifetime of the allocator.
#[derive(Debug, Clone, Default)]
pub struct TileIdAllocator {
    next: u64,
}

impl TileIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// Build a fresh, unshuffled deck with newly allocated ids.
pub fn build_deck(ids: &mut TileIdAllocator) -> Deck {
    let mut deck = Deck::new();
    for suit in Suit::ALL {
        for value in MIN_VALUE..=MAX_VALUE {
            deck.push(Tile::new(ids.allocate(), suit, value));
        }
    }
    deck
}
