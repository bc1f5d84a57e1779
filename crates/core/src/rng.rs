//! RNG module - small deterministic generator
//!
//! One master generator is seeded at startup and handed out by reference.
//! Units that need their own randomness take a [`SimpleRng::fork`] so no
//! random state is shared between them after construction.

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle with short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Generate random value in range [lo, hi]
    pub fn next_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        lo + self.next_range(hi - lo + 1)
    }

    /// Pick one element of a non-empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    /// Derive an independent generator seeded from this one.
    pub fn fork(&mut self) -> SimpleRng {
        SimpleRng::new(self.next_u32())
    }

    /// Current internal state, usable as a seed to replay the sequence.
    pub fn seed(&self) -> u32 {
        self.state
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

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_inclusive_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..2000 {
            let v = rng.next_inclusive(1, 20);
            assert!((1..=20).contains(&v));
            seen_lo |= v == 1;
            seen_hi |= v == 20;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_fork_does_not_share_state() {
        let mut master = SimpleRng::new(99);
        let mut a = master.fork();
        let b_seed = master.fork().seed();

        // Drawing from `a` leaves the master and its later forks untouched.
        for _ in 0..10 {
            a.next_u32();
        }
        let mut replay = SimpleRng::new(99);
        replay.fork();
        assert_eq!(replay.fork().seed(), b_seed);
    }
}
