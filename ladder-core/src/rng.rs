//! Boolean sources backed by an RNG or a fixed sequence.
//!
//! A seeded [`RandomBooleanSource`] makes ladder generation reproducible: the
//! same seed and the same player count always yield the same ladder, because
//! the generator consumes draws strictly in row order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generator::BooleanSource;

/// Fair coin flips from a `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomBooleanSource {
    rng: StdRng,
}

impl RandomBooleanSource {
    /// Deterministic source for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl BooleanSource for RandomBooleanSource {
    fn next_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of draws, wrapping around at the end.
///
/// An empty sequence always yields `false`.
#[derive(Debug, Clone)]
pub struct CyclicBooleanSource {
    draws: Vec<bool>,
    index: usize,
}

impl CyclicBooleanSource {
    pub fn new(draws: Vec<bool>) -> Self {
        Self { draws, index: 0 }
    }
}

impl BooleanSource for CyclicBooleanSource {
    fn next_bool(&mut self) -> bool {
        if self.draws.is_empty() {
            return false;
        }
        let draw = self.draws[self.index];
        self.index = (self.index + 1) % self.draws.len();
        draw
    }
}
