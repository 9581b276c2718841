//! Deterministic per-passenger and per-replication RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each passenger gets its own independent `SmallRng` seeded by:
//!
//!   seed = replication_seed XOR (pax_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive passenger IDs uniformly across the seed space.
//! This means:
//!
//! - Passengers never share RNG state, so the generated population does not
//!   depend on sampling order.
//! - Changing the load factor (fewer or more passengers at the tail) does
//!   not disturb the attributes of the passengers that remain.
//!
//! Replications are seeded the same way one level up: replication `i` runs
//! on `SimRng::child(i)` of the request's base seed, keeping the Monte
//! Carlo draws reproducible yet uncorrelated across replications.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PaxId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── PaxRng ────────────────────────────────────────────────────────────────────

/// Per-passenger deterministic RNG.
///
/// Created by the passenger generator for each passenger it emits; all of a
/// passenger's behavioral draws (walking speed, stow time, slide time,
/// lateness) come from here.  The boarding engine itself performs no random
/// draws.
pub struct PaxRng(SmallRng);

impl PaxRng {
    /// Seed deterministically from the replication seed and a passenger ID.
    pub fn new(replication_seed: u64, pax: PaxId) -> Self {
        let seed = replication_seed ^ (pax.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PaxRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Replication-level RNG for population-wide draws (seat occupancy shuffle,
/// random boarding order).
///
/// One `SimRng` is owned by exactly one replication; replications never
/// share RNG state, so the worker pool needs no synchronisation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — used to seed
    /// each replication deterministically from the request's base seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
