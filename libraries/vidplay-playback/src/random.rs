//! Random selection for "play random"
//!
//! Any `rand::Rng` is a `RandomSource`, so the controller can run on
//! `thread_rng()` in the console and on a seeded `StdRng` (or a fixed
//! chooser) in tests.

use rand::Rng;

/// Uniform choice over `0..len`
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        let picks_a: Vec<usize> = (0..20).map(|_| a.choose_index(5)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.choose_index(5)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn picks_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 1..30 {
            assert!(rng.choose_index(len) < len);
        }
    }
}
