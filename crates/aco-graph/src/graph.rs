//! Pheromone graph representation.
//!
//! # Data layout
//!
//! Successor lists are kept per source node in insertion order.  That order
//! carries no meaning for the algorithm, but units walk it when sampling a
//! successor, so it must be stable for runs to be reproducible.
//!
//! Per-edge data (movement cost and committed pheromone strength) lives in a
//! single `FxHashMap<EdgeKey, EdgeState>`.  Node ids are small integers, for
//! which FxHash is markedly cheaper than SipHash.
//!
//! Pheromone is an integer strength starting at 1.  It never decays and
//! only changes inside [`PheromoneGraph::commit_pheromone_updates`].

use rustc_hash::FxHashMap;
use tracing::trace;

use aco_core::NodeId;

use crate::{GraphError, GraphResult, PendingIncrements};

/// Strength assigned to a freshly registered edge.
pub const INITIAL_PHEROMONE: u64 = 1;

// ── Edge keys and views ───────────────────────────────────────────────────────

/// An ordered `(from, to)` pair identifying one directed edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey {
    pub from: NodeId,
    pub to:   NodeId,
}

impl EdgeKey {
    #[inline]
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// Read-only copy of one edge's state, produced for reporting.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeView {
    pub from:      NodeId,
    pub to:        NodeId,
    pub cost:      u32,
    pub pheromone: u64,
}

#[derive(Copy, Clone, Debug)]
struct EdgeState {
    cost:      u32,
    pheromone: u64,
}

// ── PheromoneGraph ────────────────────────────────────────────────────────────

/// Directed graph with a movement cost and a pheromone strength per edge.
///
/// Units read it through [`PheromoneAccess`](crate::PheromoneAccess) and may
/// only queue increments; topology and costs are fixed once the colony is
/// built.
#[derive(Debug, Default)]
pub struct PheromoneGraph {
    /// Successors of each source node, in registration order.
    adjacency: FxHashMap<NodeId, Vec<NodeId>>,

    /// Every node mentioned by an edge, in first-seen order.
    nodes: Vec<NodeId>,

    edges: FxHashMap<EdgeKey, EdgeState>,

    pending: PendingIncrements,

    start: Option<NodeId>,
}

impl PheromoneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Register the directed edge `from -> to` with movement cost `cost`.
    ///
    /// Re-registering an existing pair overwrites the cost and keeps the
    /// accumulated pheromone; the successor list is not duplicated.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: u32) -> GraphResult<()> {
        if cost == 0 {
            return Err(GraphError::ZeroCost { from, to });
        }
        self.note_node(from);
        self.note_node(to);

        let key = EdgeKey::new(from, to);
        match self.edges.get_mut(&key) {
            Some(state) => state.cost = cost,
            None => {
                self.edges.insert(key, EdgeState { cost, pheromone: INITIAL_PHEROMONE });
                self.adjacency.entry(from).or_default().push(to);
            }
        }
        Ok(())
    }

    /// Designate the origin node for every unit.
    ///
    /// May be called again with the same node; a different node is refused
    /// because units may already have been spawned at the first one.
    pub fn define_start(&mut self, start: NodeId) -> GraphResult<()> {
        match self.start {
            Some(existing) if existing != start => {
                Err(GraphError::StartAlreadyDefined { existing, requested: start })
            }
            _ => {
                self.note_node(start);
                self.start = Some(start);
                Ok(())
            }
        }
    }

    fn note_node(&mut self, node: NodeId) {
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    /// The start node, or [`GraphError::StartUndefined`].
    pub fn require_start(&self) -> GraphResult<NodeId> {
        self.start.ok_or(GraphError::StartUndefined)
    }

    /// Outgoing neighbours of `node` in registration order.
    ///
    /// Empty for nodes without outgoing edges (dead ends) and for unknown
    /// nodes.
    #[inline]
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains_key(&EdgeKey::new(from, to))
    }

    /// Movement cost of `from -> to`, in rounds.
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> GraphResult<u32> {
        self.edge_state(from, to).map(|e| e.cost)
    }

    /// Committed pheromone strength of `from -> to`.
    ///
    /// Increments queued this round are not included.
    pub fn edge_pheromone(&self, from: NodeId, to: NodeId) -> GraphResult<u64> {
        self.edge_state(from, to).map(|e| e.pheromone)
    }

    fn edge_state(&self, from: NodeId, to: NodeId) -> GraphResult<&EdgeState> {
        self.edges
            .get(&EdgeKey::new(from, to))
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    // ── Two-phase pheromone update ────────────────────────────────────────

    /// Queue `amount` for `from -> to`.  Takes effect at the next commit.
    pub fn queue_pheromone_increment(
        &mut self,
        from:   NodeId,
        to:     NodeId,
        amount: u64,
    ) -> GraphResult<()> {
        self.edge_state(from, to)?;
        self.pending.queue(EdgeKey::new(from, to), amount);
        Ok(())
    }

    /// Queue a single unit of pheromone for `from -> to`.
    pub fn queue_pheromone_increment_once(&mut self, from: NodeId, to: NodeId) -> GraphResult<()> {
        self.queue_pheromone_increment(from, to, 1)
    }

    /// Fold a buffer filled elsewhere (e.g. by a [`RoundBuffer`](crate::RoundBuffer))
    /// into the pending set.
    ///
    /// Every key is checked before anything is merged, so a failed merge
    /// leaves the pending set untouched.
    pub fn merge_pending(&mut self, mut other: PendingIncrements) -> GraphResult<()> {
        let drained: Vec<(EdgeKey, u64)> = other.drain().collect();
        for (key, _) in &drained {
            self.edge_state(key.from, key.to)?;
        }
        for (key, amount) in drained {
            self.pending.queue(key, amount);
        }
        Ok(())
    }

    /// Pending (uncommitted) total for `from -> to`.
    pub fn pending_increment(&self, from: NodeId, to: NodeId) -> u64 {
        self.pending.get(EdgeKey::new(from, to))
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop every pending increment without applying it.
    ///
    /// Returns the number of edges that had something pending.
    pub fn discard_pending(&mut self) -> usize {
        let dropped = self.pending.drain().count();
        if dropped > 0 {
            trace!(dropped, "discarded pending pheromone updates");
        }
        dropped
    }

    /// Apply every pending increment to the committed pheromone table and
    /// clear the pending set.
    ///
    /// Returns the number of edges whose strength changed.  With nothing
    /// pending this is a no-op returning 0.
    pub fn commit_pheromone_updates(&mut self) -> usize {
        let mut touched = 0;
        for (key, amount) in self.pending.drain() {
            // Keys were validated when queued.
            if let Some(state) = self.edges.get_mut(&key) {
                state.pheromone = state.pheromone.saturating_add(amount);
                touched += 1;
            }
        }
        trace!(touched, "committed pheromone updates");
        touched
    }

    // ── Inspection ────────────────────────────────────────────────────────

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every edge, grouped by source node in first-seen order and by
    /// successor in registration order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView> + '_ {
        self.nodes.iter().flat_map(move |&from| {
            self.successors(from).iter().filter_map(move |&to| {
                self.edges.get(&EdgeKey::new(from, to)).map(|state| EdgeView {
                    from,
                    to,
                    cost:      state.cost,
                    pheromone: state.pheromone,
                })
            })
        })
    }
}
