//! Deterministic per-unit RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each unit gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (unit_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive unit IDs uniformly across the seed space.
//! Consequences:
//!
//! - Units never share RNG state, so the order in which the colony steps
//!   them does not change any unit's draws.
//! - Growing the population does not disturb the seeds of existing units.
//! - Stepping units on worker threads needs no synchronisation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::UnitId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-unit deterministic RNG.
///
/// Create one per unit at colony init and keep them in a parallel `Vec`
/// alongside the units.
pub struct UnitRng(SmallRng);

impl UnitRng {
    /// Seed deterministically from the run's global seed and a unit ID.
    pub fn new(global_seed: u64, unit: UnitId) -> Self {
        let seed = global_seed ^ (unit.0 as u64).wrapping_mul(MIXING_CONSTANT);
        UnitRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform integer in the inclusive range `[1, total]`.
    ///
    /// # Panics
    /// Panics if `total == 0`.
    #[inline]
    pub fn draw_ticket(&mut self, total: u64) -> u64 {
        self.0.gen_range(1..=total)
    }
}
