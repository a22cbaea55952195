//! Traversal mode and per-tick step outcomes.

use aco_core::NodeId;
use aco_graph::EdgeKey;

/// Which rule a unit applies when its transit countdown reaches zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TraversalState {
    /// Seeking a new node.
    #[default]
    Forward,
    /// Retreating along the recorded path after reaching a dead end.
    Backward,
}

impl TraversalState {
    pub fn as_str(self) -> &'static str {
        match self {
            TraversalState::Forward  => "forward",
            TraversalState::Backward => "backward",
        }
    }
}

impl std::fmt::Display for TraversalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a unit did during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Still in transit; `remaining` ticks left after this one.
    Waiting { remaining: u32 },

    /// Moved forward across `edge` and will spend `cost` ticks in transit.
    ///
    /// `restarted` is set when the unit finished a full backtrack to the
    /// start earlier in the same tick.
    Advanced { edge: EdgeKey, cost: u32, restarted: bool },

    /// Retreated from `edge.to` back to `edge.from`, queueing
    /// [`RETREAT_REINFORCEMENT`](crate::RETREAT_REINFORCEMENT) on `edge`.
    ///
    /// `dead_end` is set when the unit discovered the dead end in this same
    /// tick.
    Retreated { edge: EdgeKey, cost: u32, dead_end: bool },

    /// Sitting at a start node that has no successors.  Nothing changes.
    Stranded { at: NodeId },
}

impl StepOutcome {
    /// `true` if the unit changed node this tick.
    pub fn moved(&self) -> bool {
        matches!(self, StepOutcome::Advanced { .. } | StepOutcome::Retreated { .. })
    }
}
