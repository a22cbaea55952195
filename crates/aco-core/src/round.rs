//! Round counter and colony configuration.
//!
//! # Design
//!
//! A round is one synchronized step of the colony: every unit acts once and
//! then the graph commits its queued pheromone increments.  Rounds are the
//! only notion of time; edge costs are measured in rounds of latency.

use std::fmt;

use crate::{AcoError, AcoResult};

// ── Round ────────────────────────────────────────────────────────────────────

/// An absolute round counter, starting at zero.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round immediately after `self`.
    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }

    /// Rounds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Round) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u64) -> Round {
        Round(self.0 + rhs)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

// ── ColonyConfig ─────────────────────────────────────────────────────────────

/// Construction-time parameters for one colony run.
///
/// There is no dynamic reconfiguration: the colony reads these once when it
/// is built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyConfig {
    /// Number of units spawned at the start node.
    pub unit_count: usize,

    /// Rounds executed by `Colony::run`.
    pub total_rounds: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon when stepping in parallel.
    /// `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit a path snapshot every N rounds.  0 disables snapshots.
    pub snapshot_interval_rounds: u64,
}

impl ColonyConfig {
    /// A config for `unit_count` units over `total_rounds` rounds with
    /// snapshots disabled.
    pub fn new(unit_count: usize, total_rounds: u64, seed: u64) -> Self {
        Self {
            unit_count,
            total_rounds,
            seed,
            num_threads: None,
            snapshot_interval_rounds: 0,
        }
    }

    /// The round at which `Colony::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_round(&self) -> Round {
        Round(self.total_rounds)
    }

    /// `true` if observers should receive a path snapshot after `round`.
    #[inline]
    pub fn is_snapshot_round(&self, round: Round) -> bool {
        self.snapshot_interval_rounds > 0
            && round.0.is_multiple_of(self.snapshot_interval_rounds)
    }

    /// Reject configurations the colony cannot run.
    pub fn validate(&self) -> AcoResult<()> {
        if self.unit_count == 0 {
            return Err(AcoError::Config("unit_count must be at least 1".into()));
        }
        if u32::try_from(self.unit_count).is_err() {
            return Err(AcoError::Config(format!(
                "unit_count {} exceeds the UnitId range",
                self.unit_count
            )));
        }
        if self.num_threads == Some(0) {
            return Err(AcoError::Config("num_threads must be at least 1 when set".into()));
        }
        Ok(())
    }
}
