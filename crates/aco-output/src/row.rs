//! Plain data row types written by output backends.

use std::fmt;

/// Final (or current) pheromone of one edge, keyed by node symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PheromoneRow {
    pub from:      String,
    pub to:        String,
    pub cost:      u32,
    pub pheromone: u64,
}

impl fmt::Display for PheromoneRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) = {}", self.from, self.to, self.pheromone)
    }
}

/// One unit's traversal state at a snapshot round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSnapshotRow {
    pub unit_id:  u32,
    pub round:    u64,
    pub position: String,
    /// `"forward"` or `"backward"`.
    pub state:    &'static str,
    pub wait:     u32,
    /// Path from the start to the current node, joined with `>`.
    pub path:     String,
}

/// Step statistics for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummaryRow {
    pub round:           u64,
    pub advanced:        u64,
    pub retreated:       u64,
    pub waiting:         u64,
    pub stranded:        u64,
    pub committed_edges: u64,
}
