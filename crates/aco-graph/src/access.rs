//! The seam between units and the graph.
//!
//! Units see the graph only through [`PheromoneAccess`]: three read
//! operations on committed state and one enqueue operation.  Two
//! implementations exist:
//!
//! - [`PheromoneGraph`] itself, which queues into its own pending set.  Used
//!   when the colony steps units one after another.
//! - [`RoundBuffer`], which reads a shared `&PheromoneGraph` and queues into a
//!   private [`PendingIncrements`].  Used when units step on worker threads;
//!   the colony merges the buffers before committing.

use aco_core::NodeId;

use crate::{EdgeKey, GraphResult, PendingIncrements, PheromoneGraph};

/// Read committed edge state and queue deferred pheromone increments.
pub trait PheromoneAccess {
    /// Outgoing neighbours of `node` in their fixed order.
    fn successors(&self, node: NodeId) -> &[NodeId];

    fn edge_cost(&self, from: NodeId, to: NodeId) -> GraphResult<u32>;

    /// Pheromone as of the last commit.
    fn edge_pheromone(&self, from: NodeId, to: NodeId) -> GraphResult<u64>;

    /// Queue `amount` for `from -> to`; invisible to every reader until the
    /// next commit.
    fn queue_pheromone_increment(&mut self, from: NodeId, to: NodeId, amount: u64)
        -> GraphResult<()>;
}

impl PheromoneAccess for PheromoneGraph {
    #[inline]
    fn successors(&self, node: NodeId) -> &[NodeId] {
        PheromoneGraph::successors(self, node)
    }

    #[inline]
    fn edge_cost(&self, from: NodeId, to: NodeId) -> GraphResult<u32> {
        PheromoneGraph::edge_cost(self, from, to)
    }

    #[inline]
    fn edge_pheromone(&self, from: NodeId, to: NodeId) -> GraphResult<u64> {
        PheromoneGraph::edge_pheromone(self, from, to)
    }

    #[inline]
    fn queue_pheromone_increment(
        &mut self,
        from:   NodeId,
        to:     NodeId,
        amount: u64,
    ) -> GraphResult<()> {
        PheromoneGraph::queue_pheromone_increment(self, from, to, amount)
    }
}

// ── RoundBuffer ───────────────────────────────────────────────────────────────

/// A shared read-only graph paired with a private increment buffer.
///
/// Lets many units step concurrently against the same `&PheromoneGraph`;
/// each unit's increments stay local until
/// [`PheromoneGraph::merge_pending`] folds them back in.
pub struct RoundBuffer<'g> {
    graph:   &'g PheromoneGraph,
    pending: PendingIncrements,
}

impl<'g> RoundBuffer<'g> {
    pub fn new(graph: &'g PheromoneGraph) -> Self {
        Self { graph, pending: PendingIncrements::new() }
    }

    /// Increments queued through this buffer so far.
    pub fn pending(&self) -> &PendingIncrements {
        &self.pending
    }

    /// Release the graph borrow and hand back the queued increments.
    pub fn into_pending(self) -> PendingIncrements {
        self.pending
    }
}

impl PheromoneAccess for RoundBuffer<'_> {
    #[inline]
    fn successors(&self, node: NodeId) -> &[NodeId] {
        self.graph.successors(node)
    }

    #[inline]
    fn edge_cost(&self, from: NodeId, to: NodeId) -> GraphResult<u32> {
        self.graph.edge_cost(from, to)
    }

    #[inline]
    fn edge_pheromone(&self, from: NodeId, to: NodeId) -> GraphResult<u64> {
        self.graph.edge_pheromone(from, to)
    }

    fn queue_pheromone_increment(
        &mut self,
        from:   NodeId,
        to:     NodeId,
        amount: u64,
    ) -> GraphResult<()> {
        self.graph.edge_cost(from, to)?;
        self.pending.queue(EdgeKey::new(from, to), amount);
        Ok(())
    }
}
