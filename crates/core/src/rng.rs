//! RNG module - seeded randomness for generation and refill
//!
//! One injected [`GemRng`] state drives both board generation and cascade
//! refill draws, so a whole game session replays exactly from its seed.
//! Never reach for ambient randomness in this crate.

use gem_crush_types::TileKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct GemRng {
    state: u32,
}

impl GemRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Draw a kind uniformly from the first `kind_count` entries of
    /// [`TileKind::ALL`]
    ///
    /// `kind_count` must be within 1..=7; callers validate the pool size
    /// at the session boundary.
    pub fn draw_kind(&mut self, kind_count: u8) -> TileKind {
        let idx = self.next_range(kind_count as u32) as usize;
        TileKind::ALL[idx]
    }

    /// Current internal state (for session replay diagnostics)
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = GemRng::new(12345);
        let mut rng2 = GemRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut a = GemRng::new(0);
        let mut b = GemRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = GemRng::new(12345);
        let mut rng2 = GemRng::new(54321);

        // Different seeds should diverge immediately for these values
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_draw_kind_stays_in_pool() {
        let mut rng = GemRng::new(7);
        for _ in 0..200 {
            let kind = rng.draw_kind(4);
            assert!(kind.index() < 4, "drew {:?} outside 4-kind pool", kind);
        }
    }

    #[test]
    fn test_draw_kind_covers_pool() {
        let mut rng = GemRng::new(99);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.draw_kind(5).index()] = true;
        }
        assert_eq!(seen[..5], [true; 5]);
        assert_eq!(seen[5..], [false; 2]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GemRng::new(42);
        let mut kinds = TileKind::ALL;
        rng.shuffle(&mut kinds);
        for kind in TileKind::ALL {
            assert!(kinds.contains(&kind));
        }
    }
}
