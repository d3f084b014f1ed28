//! RNG module - injectable random sources for deck shuffling
//!
//! Round generation only needs two things from randomness: a uniform index
//! below a bound, and a uniform shuffle built on top of it. [`RandomSource`]
//! captures exactly that so callers can swap in:
//!
//! - [`SimpleRng`]: a tiny seeded LCG for deterministic tests and replays
//! - [`EntropyRng`]: `rand`'s `StdRng`, seeded or drawn from the OS
//! - any scripted source that overrides [`RandomSource::shuffle`]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform randomness for deck shuffling.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Shuffle a slice in place using Fisher-Yates.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl<R: RandomSource> RandomSource for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        (**self).shuffle(slice)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (restarting from it replays the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

/// `StdRng`-backed source for real play.
#[derive(Debug, Clone)]
pub struct EntropyRng {
    rng: StdRng,
}

impl EntropyRng {
    /// Seed from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `Some(seed)` gives a reproducible stream, `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_os(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::from_os()
    }
}

impl RandomSource for EntropyRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_below_stays_in_bounds() {
        let mut simple = SimpleRng::new(7);
        let mut entropy = EntropyRng::seeded(7);
        for bound in 1..=27 {
            for _ in 0..50 {
                assert!(simple.next_below(bound) < bound);
                assert!(entropy.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut values: Vec<u32> = (0..27).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..27).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_entropy_replays() {
        let mut a = EntropyRng::seeded(2024);
        let mut b = EntropyRng::seeded(2024);
        let mut xs: Vec<u8> = (0..27).collect();
        let mut ys = xs.clone();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<R: RandomSource>(mut rng: R) -> u32 {
            rng.next_below(100)
        }

        let mut owned = SimpleRng::new(5);
        let mut replay = SimpleRng::new(5);
        assert_eq!(draw(&mut owned), replay.next_below(100));
        assert_eq!(draw(&mut owned), replay.next_below(100));
    }
}
