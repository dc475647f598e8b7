//! Seeded pseudo-random numbers for scene decoration.

/// A source of uniformly distributed pseudo-random numbers.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `0.0..1.0`.
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits: the low bits of an LCG are weak
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value between `lo` and `hi`.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

/// 32-bit linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;

    /// Create a generator; the 64-bit seed is folded into 32 bits of state.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ (seed >> 32)) as u32,
        }
    }
}

impl RandomSource for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_u32(), 1_013_904_223);
        assert_eq!(rng.next_u32(), 1_196_435_762);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Lcg::new(0xdead_beef);
        let mut b = Lcg::new(0xdead_beef);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Lcg::new(1);
        let mut b = Lcg::new(2);
        let a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = Lcg::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
        for _ in 0..1_000 {
            let v = rng.range(5.0, 10.0);
            assert!((5.0..=10.0).contains(&v));
        }
    }
}
