//! Round generation - rejection sampling over shuffled decks
//!
//! Each attempt shuffles a fresh deck, takes the first `rows * columns` tiles
//! and keeps them if their pair count falls inside the tier's range. After
//! [`MAX_GENERATION_ATTEMPTS`] misses the generator returns one more
//! unconstrained selection, so generation always terminates.

use tracing::{debug, warn};

use crate::deck::{build_deck, TileIdAllocator};
use crate::pairs::count_valid_pairs;
use crate::rng::RandomSource;
use crate::types::{Difficulty, Tile, TierParams, DECK_SIZE, MAX_GENERATION_ATTEMPTS};

/// One playable board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Board tiles in display order (row-major)
    pub tiles: Vec<Tile>,
    /// Disjoint pairs an optimal player can clear
    pub available_pairs: u32,
    /// Number of decks shuffled to produce this round
    pub attempts: u32,
    /// True when the attempt budget ran out and `available_pairs` may be
    /// outside the tier's range
    pub used_fallback: bool,
}

impl Round {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Builds rounds from an injected random source.
#[derive(Debug, Clone)]
pub struct RoundGenerator<R> {
    rng: R,
    ids: TileIdAllocator,
}

impl<R: RandomSource> RoundGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            ids: TileIdAllocator::new(),
        }
    }

    /// Build a round for a built-in tier.
    pub fn build_round(&mut self, difficulty: Difficulty) -> Round {
        self.build_round_for(&difficulty.params())
    }

    /// Build a round for arbitrary tier parameters.
    ///
    /// Never fails. Boards larger than a deck are clamped to the deck size.
    pub fn build_round_for(&mut self, params: &TierParams) -> Round {
        let wanted = params.grid.cells().min(DECK_SIZE);

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let mut selection = self.draw_selection(wanted);
            let pairs = count_valid_pairs(&selection);

            if params.accepts(pairs) {
                // Re-shuffle so the deck's truncation order doesn't leak into layout.
                self.rng.shuffle(&mut selection);
                debug!(tier = params.name, attempt, pairs, "round generated");
                return Round {
                    tiles: selection,
                    available_pairs: pairs,
                    attempts: attempt,
                    used_fallback: false,
                };
            }
        }

        let tiles = self.draw_selection(wanted);
        let pairs = count_valid_pairs(&tiles);
        warn!(
            tier = params.name,
            pairs,
            min_pairs = params.min_pairs,
            max_pairs = params.max_pairs,
            "pair range not reached after {} attempts, using unconstrained round",
            MAX_GENERATION_ATTEMPTS
        );
        Round {
            tiles,
            available_pairs: pairs,
            attempts: MAX_GENERATION_ATTEMPTS + 1,
            used_fallback: true,
        }
    }

    /// Shuffle a fresh deck and keep its first `count` tiles.
    fn draw_selection(&mut self, count: usize) -> Vec<Tile> {
        let mut deck = build_deck(&mut self.ids);
        self.rng.shuffle(&mut deck);
        deck.truncate(count);
        deck.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::GridSize;

    /// Moves the listed deck indices to the front of every full-deck
    /// shuffle, leaves shorter slices alone, and records each shuffle's
    /// slice length.
    #[derive(Default)]
    struct Scripted {
        front: Vec<usize>,
        lengths: Vec<usize>,
    }

    impl Scripted {
        fn with_front(front: &[usize]) -> Self {
            Self {
                front: front.to_vec(),
                lengths: Vec::new(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_below(&mut self, _bound: u32) -> u32 {
            0
        }

        fn shuffle<T>(&mut self, slice: &mut [T]) {
            self.lengths.push(slice.len());
            if slice.len() != DECK_SIZE {
                return;
            }
            // origin[p] is the deck index currently sitting at position p
            let mut origin: Vec<usize> = (0..slice.len()).collect();
            for (k, &want) in self.front.iter().enumerate() {
                let Some(p) = origin.iter().position(|&o| o == want) else {
                    continue;
                };
                slice.swap(k, p);
                origin.swap(k, p);
            }
        }
    }

    #[test]
    fn test_round_size_matches_grid() {
        let mut generator = RoundGenerator::new(SimpleRng::new(42));
        for tier in Difficulty::ALL {
            let round = generator.build_round(tier);
            assert_eq!(round.len(), tier.params().grid.cells());
        }
    }

    #[test]
    fn test_scripted_easy_round_accepted_first_try() {
        // Blossom 1..=9, Lantern 1..=4, Tide 1..=3:
        // 1/9, 2/8, 3/7, 4/6 once each, single 5 -> 4 pairs
        let front: Vec<usize> = (0..9).chain(9..13).chain(18..21).collect();
        let mut generator = RoundGenerator::new(Scripted::with_front(&front));
        let round = generator.build_round(Difficulty::Relaxed);

        assert_eq!(round.available_pairs, 4);
        assert_eq!(round.attempts, 1);
        assert!(!round.used_fallback);
        assert_eq!(round.len(), 16);
    }

    #[test]
    fn test_unshuffled_easy_round_falls_back() {
        // Blossom 1..=9 + Lantern 1..=7 -> 1/9, 2/8, 3/7 x2, 4/6 x2, 5/5 = 7 pairs
        let mut generator = RoundGenerator::new(Scripted::default());
        let round = generator.build_round(Difficulty::Relaxed);

        assert!(round.used_fallback);
        assert_eq!(round.available_pairs, 7);
        assert_eq!(round.attempts, MAX_GENERATION_ATTEMPTS + 1);
    }

    #[test]
    fn test_unshuffled_hard_round_falls_back() {
        // 25 unshuffled tiles always hold 11 pairs, above the 10 maximum.
        let mut generator = RoundGenerator::new(Scripted::default());
        let round = generator.build_round(Difficulty::Relentless);

        assert!(round.used_fallback);
        assert_eq!(round.available_pairs, 11);
        assert_eq!(round.attempts, MAX_GENERATION_ATTEMPTS + 1);
        assert_eq!(round.len(), 25);
    }

    #[test]
    fn test_accepted_selection_is_reshuffled() {
        let front: Vec<usize> = (0..9).chain(9..13).chain(18..21).collect();
        let mut generator = RoundGenerator::new(Scripted::with_front(&front));
        let round = generator.build_round(Difficulty::Relaxed);

        assert!(!round.used_fallback);
        assert_eq!(generator.rng.lengths, vec![DECK_SIZE, 16]);
    }

    #[test]
    fn test_fallback_selection_is_not_reshuffled() {
        let mut generator = RoundGenerator::new(Scripted::default());
        let round = generator.build_round(Difficulty::Relentless);

        assert!(round.used_fallback);
        let lengths = &generator.rng.lengths;
        assert_eq!(lengths.len(), MAX_GENERATION_ATTEMPTS as usize + 1);
        assert!(lengths.iter().all(|&len| len == DECK_SIZE));
        assert_eq!(lengths.last(), Some(&DECK_SIZE));
    }

    #[test]
    fn test_unreachable_range_terminates() {
        let params = TierParams::custom("Impossible", GridSize::new(2, 2), 5, 3, 3);
        let mut generator = RoundGenerator::new(SimpleRng::new(7));
        let round = generator.build_round_for(&params);

        assert!(round.used_fallback);
        assert_eq!(round.len(), 4);
        assert!(round.available_pairs <= 2);
    }

    #[test]
    fn test_oversized_grid_is_clamped() {
        let params = TierParams::custom("Huge", GridSize::new(6, 6), 5, 0, 18);
        let mut generator = RoundGenerator::new(SimpleRng::new(3));
        let round = generator.build_round_for(&params);

        assert_eq!(round.len(), DECK_SIZE);
        assert_eq!(round.available_pairs, 13);
    }

    #[test]
    fn test_round_tiles_are_distinct() {
        let mut generator = RoundGenerator::new(SimpleRng::new(11));
        let round = generator.build_round(Difficulty::Relentless);

        let ids: std::collections::HashSet<_> = round.tiles.iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), round.len());
    }

    #[test]
    fn test_same_seed_same_round() {
        let mut a = RoundGenerator::new(SimpleRng::new(1234));
        let mut b = RoundGenerator::new(SimpleRng::new(1234));

        for tier in Difficulty::ALL {
            let ra = a.build_round(tier);
            let rb = b.build_round(tier);
            let va: Vec<_> = ra.tiles.iter().map(|t| (t.suit(), t.value())).collect();
            let vb: Vec<_> = rb.tiles.iter().map(|t| (t.suit(), t.value())).collect();
            assert_eq!(va, vb);
            assert_eq!(ra.available_pairs, rb.available_pairs);
        }
    }
}
