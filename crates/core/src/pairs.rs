//! Pair validation and counting.
//!
//! Only `value` decides whether two tiles pair up, so tiles of equal value are
//! interchangeable. That makes the maximum number of disjoint pairs on a board
//! a closed-form count over value histograms, independent of tile positions.

use crate::types::{Tile, MAX_VALUE, PAIR_SUM};

/// Whether two tiles sum to ten.
///
/// Pure and symmetric; does not look at identity or suit.
///
/// # Examples
///
/// ```
/// use match_ten_core::is_pair;
/// use match_ten_core::types::{Suit, Tile, TileId};
///
/// let three = Tile::new(TileId(0), Suit::Blossom, 3);
/// let seven = Tile::new(TileId(1), Suit::Tide, 7);
/// assert!(is_pair(&three, &seven));
/// assert!(!is_pair(&three, &three));
/// ```
pub fn is_pair(a: &Tile, b: &Tile) -> bool {
    u16::from(a.value()) + u16::from(b.value()) == u16::from(PAIR_SUM)
}

/// Count of tiles per value; index 0 is unused.
pub fn value_histogram(tiles: &[Tile]) -> [u32; MAX_VALUE as usize + 1] {
    let mut counts = [0u32; MAX_VALUE as usize + 1];
    for tile in tiles {
        counts[usize::from(tile.value())] += 1;
    }
    counts
}

/// Number of disjoint pairs an optimal matching can clear.
///
/// `min(count[v], count[10 - v])` for v in 1..=4, plus `count[5] / 2`.
///
/// # Examples
///
/// ```
/// use match_ten_core::count_valid_pairs;
/// use match_ten_core::types::{Suit, Tile, TileId};
///
/// let tiles: Vec<Tile> = [1, 9, 2, 8, 5, 5, 3, 3]
///     .iter()
///     .enumerate()
///     .map(|(i, &v)| Tile::new(TileId(i as u64), Suit::Lantern, v))
///     .collect();
/// assert_eq!(count_valid_pairs(&tiles), 3);
/// ```
pub fn count_valid_pairs(tiles: &[Tile]) -> u32 {
    let counts = value_histogram(tiles);
    let half = PAIR_SUM / 2;

    let complements: u32 = (1..half)
        .map(|v| counts[v as usize].min(counts[(PAIR_SUM - v) as usize]))
        .sum();

    complements + counts[half as usize] / 2
}
