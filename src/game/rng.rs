//! Small deterministic PRNG
//!
//! Xorshift32, seeded explicitly. Good enough for cloud scatter and enemy
//! spawn positions, and deterministic so gameplay logic stays testable.

/// Xorshift32 random number generator
#[derive(Debug, Clone)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a generator from a seed (zero is remapped, xorshift can't hold it)
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9 } else { seed },
        }
    }

    /// Next random value in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        // Keep strictly below 1.0 so range() stays within [min, max)
        (self.state >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Random float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..10_000 {
            let v = rng.range(10.0, 400.0);
            assert!((10.0..400.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_deterministic_for_same_seed() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn test_zero_seed_still_produces_values() {
        let mut rng = GameRng::new(0);
        let first = rng.next_f32();
        let second = rng.next_f32();
        assert_ne!(first, second);
    }
}
