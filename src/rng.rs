// src/rng.rs
//! Random Pair Generation
//!
//! # Design
//!
//! The sampler never touches a concrete RNG. It pulls pairs from a
//! [`PairSource`], so tests can substitute a scripted sequence and the
//! binary can plug in an entropy-seeded [`StdRng`].
//!
//! # Range construction
//!
//! A raw 64-bit draw is mapped into `[1, max_number]` with
//! ```text
//! value = raw mod max_number + 1
//! ```
//! The modulo bias is at most `max_number / 2^64`, far below the Monte Carlo
//! noise of any practical run.
//!
//! # Seeding
//!
//! The process draws one seed from OS entropy and never reseeds per pair.
//! For parallel runs [`RngFactory`] derives one `StdRng` per chunk from that
//! base seed, so the result for a given seed does not depend on how many
//! threads executed the chunks.

use crate::error::{validation::validate_upper_bound, PiResult};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Source of sample pairs, each value in `[1, max_number]`
pub trait PairSource {
    fn next_pair(&mut self) -> (u64, u64);
}

/// Map a raw draw into `[1, max_number]`. `max_number` must be non-zero.
#[inline]
pub fn reduce_to_range(raw: u64, max_number: u64) -> u64 {
    raw % max_number + 1
}

/// Uniform pair generator over any `rand` core RNG
#[derive(Debug, Clone)]
pub struct UniformPairGenerator<R> {
    rng: R,
    max_number: u64,
}

impl<R: RngCore> UniformPairGenerator<R> {
    pub fn new(rng: R, max_number: u64) -> PiResult<Self> {
        validate_upper_bound(max_number)?;
        Ok(Self { rng, max_number })
    }

    pub fn max_number(&self) -> u64 {
        self.max_number
    }

    pub fn next_value(&mut self) -> u64 {
        reduce_to_range(self.rng.next_u64(), self.max_number)
    }
}

impl UniformPairGenerator<StdRng> {
    /// Generator seeded once from OS entropy
    pub fn from_entropy(max_number: u64) -> PiResult<Self> {
        Self::new(StdRng::from_entropy(), max_number)
    }

    /// Generator with a fixed seed, for reproducible runs
    pub fn seeded(seed: u64, max_number: u64) -> PiResult<Self> {
        Self::new(StdRng::seed_from_u64(seed), max_number)
    }
}

impl<R: RngCore> PairSource for UniformPairGenerator<R> {
    fn next_pair(&mut self) -> (u64, u64) {
        let rand1 = self.next_value();
        let rand2 = self.next_value();
        (rand1, rand2)
    }
}

/// RNG factory for reproducible parallel sampling
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Independent stream for one chunk of trials
    pub fn create_std_rng(&self, chunk_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(chunk_id))
    }

    /// Pair generator bound to one chunk's stream
    pub fn create_generator(
        &self,
        chunk_id: u64,
        max_number: u64,
    ) -> PiResult<UniformPairGenerator<StdRng>> {
        UniformPairGenerator::new(self.create_std_rng(chunk_id), max_number)
    }
}

/// One 64-bit seed from OS entropy
pub fn entropy_seed() -> u64 {
    StdRng::from_entropy().next_u64()
}
