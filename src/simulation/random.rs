//! Random value sources for the simulation
//!
//! Every random decision (which parts break, whether a technician
//! misdiagnoses, which wrong part gets picked) goes through
//! [`RandomSource`] so runs can be reproduced or scripted.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Provider of uniformly distributed integers
pub trait RandomSource {
    /// Returns a value in the half-open range `[min, max)`.
    /// Returns `min` when the range is empty.
    fn uniform(&mut self, min: i32, max: i32) -> i32;

    /// Returns an index in `[0, len)`, or 0 when `len` is 0
    fn index(&mut self, len: usize) -> usize {
        let max = i32::try_from(len).unwrap_or(i32::MAX);
        self.uniform(0, max).max(0) as usize
    }
}

/// Random source backed by `rand`, optionally seeded
#[derive(Debug, Clone, Default)]
pub struct SimRandom {
    /// Seeded RNG for reproducible runs; thread RNG is used when absent
    rng: Option<StdRng>,
}

impl SimRandom {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Create a random source with a seeded RNG for reproducible simulations
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.rng.is_some()
    }
}

impl RandomSource for SimRandom {
    fn uniform(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        match &mut self.rng {
            Some(rng) => rng.random_range(min..max),
            None => rand::rng().random_range(min..max),
        }
    }
}

/// Scripted random source that replays a fixed list of values.
///
/// Each value is clamped into the requested range. Once the script runs
/// out, `fallback` is used for every further draw.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: VecDeque<i32>,
    fallback: i32,
}

impl FixedSequence {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0,
        }
    }

    /// A source that always returns `value` (clamped to the range)
    pub fn constant(value: i32) -> Self {
        Self {
            values: VecDeque::new(),
            fallback: value,
        }
    }

    pub fn with_fallback(mut self, fallback: i32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of scripted values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for FixedSequence {
    fn uniform(&mut self, min: i32, max: i32) -> i32 {
        let value = self.values.pop_front().unwrap_or(self.fallback);
        if min >= max {
            return min;
        }
        value.clamp(min, max - 1)
    }
}
