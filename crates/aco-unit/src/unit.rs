//! The `Unit` traversal agent.

use aco_core::{NodeId, UnitId, UnitRng};
use aco_graph::{EdgeKey, PheromoneAccess};

use crate::select::choose_successor;
use crate::{StepOutcome, TraversalState, UnitError, UnitResult};

/// Pheromone queued on an edge each time a unit retreats across it.
pub const RETREAT_REINFORCEMENT: u64 = 2;

/// One traversal agent.
///
/// The path stack always holds at least the start node, and its top is the
/// unit's position: after a forward move the top is the node just entered,
/// after a retreat it is the node returned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    id:       UnitId,
    position: NodeId,
    state:    TraversalState,
    /// Ticks left in transit before the unit may act again.
    wait:     u32,
    path:     Vec<NodeId>,
}

impl Unit {
    /// A fresh unit standing at `start`, heading forward.
    pub fn new(id: UnitId, start: NodeId) -> Self {
        Self {
            id,
            position: start,
            state:    TraversalState::Forward,
            wait:     0,
            path:     vec![start],
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn position(&self) -> NodeId {
        self.position
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }

    pub fn wait(&self) -> u32 {
        self.wait
    }

    /// Visited nodes from the start (bottom) to the current node (top).
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    #[inline]
    pub fn in_transit(&self) -> bool {
        self.wait > 0
    }

    /// Advance this unit by one tick.
    ///
    /// Mode switches (dead end → BACKWARD, exhausted path → FORWARD) are
    /// re-evaluated inside the same tick, so detecting a dead end or
    /// finishing a backtrack costs no extra latency.
    ///
    /// Reads only committed pheromone through `graph`; the only write is
    /// the deferred increment queued on retreat.
    pub fn step<G: PheromoneAccess + ?Sized>(
        &mut self,
        graph: &mut G,
        rng:   &mut UnitRng,
    ) -> UnitResult<StepOutcome> {
        if self.wait > 0 {
            self.wait -= 1;
            return Ok(StepOutcome::Waiting { remaining: self.wait });
        }

        let mut dead_end  = false;
        let mut restarted = false;

        loop {
            match self.state {
                TraversalState::Forward => {
                    let from = self.position;
                    let candidates = graph.successors(from);

                    if candidates.is_empty() {
                        // At the start with nowhere to go: retreating would
                        // only land back here, forever.
                        if self.path.len() <= 1 {
                            return Ok(StepOutcome::Stranded { at: from });
                        }
                        self.state = TraversalState::Backward;
                        dead_end = true;
                        continue;
                    }

                    let to   = choose_successor(graph, self.id, from, candidates, rng)?;
                    let cost = graph.edge_cost(from, to)?;

                    self.path.push(to);
                    self.position = to;
                    self.wait = cost;
                    return Ok(StepOutcome::Advanced {
                        edge: EdgeKey::new(from, to),
                        cost,
                        restarted,
                    });
                }

                TraversalState::Backward => {
                    let depth = self.path.len();
                    let leaving = *self.path.last().ok_or(UnitError::EmptyPath(self.id))?;

                    if depth < 2 {
                        // Path exhausted: back at the start.  The start node
                        // stays on the stack.
                        self.state = TraversalState::Forward;
                        self.position = leaving;
                        restarted = true;
                        continue;
                    }

                    let back_to = self.path[depth - 2];
                    let cost = graph.edge_cost(back_to, leaving)?;
                    graph.queue_pheromone_increment(back_to, leaving, RETREAT_REINFORCEMENT)?;

                    self.path.pop();
                    self.position = back_to;
                    self.wait = cost;
                    return Ok(StepOutcome::Retreated {
                        edge: EdgeKey::new(back_to, leaving),
                        cost,
                        dead_end,
                    });
                }
            }
        }
    }
}
