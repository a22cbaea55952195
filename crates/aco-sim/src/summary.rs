//! Per-round step statistics.

use aco_core::Round;
use aco_unit::StepOutcome;

/// Counts of what the population did during one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundSummary {
    pub round:           Round,
    /// Units that moved forward onto a new node.
    pub advanced:        usize,
    /// Units that retreated one edge (each queued a reinforcement).
    pub retreated:       usize,
    /// Units still in transit.
    pub waiting:         usize,
    /// Units stuck at a start node without successors.
    pub stranded:        usize,
    /// Retreats that began at a freshly detected dead end.
    pub dead_ends:       usize,
    /// Forward moves that followed a completed backtrack.
    pub restarts:        usize,
    /// Edges whose pheromone changed at this round's commit.
    pub committed_edges: usize,
}

impl RoundSummary {
    pub fn new(round: Round) -> Self {
        Self { round, ..Self::default() }
    }

    pub(crate) fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Waiting { .. } => self.waiting += 1,
            StepOutcome::Advanced { restarted, .. } => {
                self.advanced += 1;
                self.restarts += restarted as usize;
            }
            StepOutcome::Retreated { dead_end, .. } => {
                self.retreated += 1;
                self.dead_ends += dead_end as usize;
            }
            StepOutcome::Stranded { .. } => self.stranded += 1,
        }
    }

    /// Units that acted this round (every unit is counted exactly once).
    pub fn units_stepped(&self) -> usize {
        self.advanced + self.retreated + self.waiting + self.stranded
    }
}
