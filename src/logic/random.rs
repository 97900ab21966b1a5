//! Injectable randomness for page draws and the toss.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integers. Tests supply fixed sequences.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn next_int(&mut self, low: u32, high: u32) -> u32;
}

/// `RandomSource` backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// Production wiring: seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }
}
