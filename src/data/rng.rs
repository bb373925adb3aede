//! Seeded random number generation for sequence data.
//!
//! PCG64 seeded from a single `u64`: the same seed yields bit-identical
//! sequences on every platform, so a generated array can be reproduced
//! from the seed shown in the UI.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone)]
pub struct SeqRng {
    seed: u64,
    rng: Pcg64,
}

impl SeqRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the wall clock.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos)
    }

    /// Seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_range_i64(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "Invalid range: min > max");
        self.rng.gen_range(min..=max)
    }

    /// Raw 64-bit value.
    pub fn gen_u64(&mut self) -> u64 {
        self.rng.gen()
    }
}
