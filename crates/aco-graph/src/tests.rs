//! Unit tests for aco-graph.
//!
//! All tests use hand-built graphs; node numbering follows the reference
//! scenario (A = 1, B = 2, …).

#[cfg(test)]
mod helpers {
    use aco_core::NodeId;

    use crate::PheromoneGraph;

    pub const A: NodeId = NodeId(1);
    pub const B: NodeId = NodeId(2);
    pub const C: NodeId = NodeId(3);
    pub const D: NodeId = NodeId(4);

    /// A → {B (cost 2), C (cost 6)}, B and C are dead ends, start = A.
    pub fn fork() -> PheromoneGraph {
        let mut g = PheromoneGraph::new();
        g.add_edge(A, B, 2).unwrap();
        g.add_edge(A, C, 6).unwrap();
        g.define_start(A).unwrap();
        g
    }
}

// ── Construction & lookups ────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::helpers::*;
    use crate::{GraphError, PheromoneGraph};

    #[test]
    fn empty_graph() {
        let g = PheromoneGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.start(), None);
        assert_eq!(g.require_start(), Err(GraphError::StartUndefined));
    }

    #[test]
    fn new_edges_start_with_unit_pheromone() {
        let g = fork();
        assert_eq!(g.edge_pheromone(A, B), Ok(1));
        assert_eq!(g.edge_pheromone(A, C), Ok(1));
        assert_eq!(g.edge_cost(A, B), Ok(2));
        assert_eq!(g.edge_cost(A, C), Ok(6));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn successors_keep_insertion_order() {
        let mut g = PheromoneGraph::new();
        g.add_edge(A, D, 4).unwrap();
        g.add_edge(A, B, 2).unwrap();
        g.add_edge(A, C, 6).unwrap();
        assert_eq!(g.successors(A), &[D, B, C]);
    }

    #[test]
    fn dead_ends_and_unknown_nodes_have_no_successors() {
        let g = fork();
        assert!(g.successors(B).is_empty());
        assert!(g.successors(D).is_empty());
    }

    #[test]
    fn missing_edge_lookups_fail_loudly() {
        let g = fork();
        assert_eq!(g.edge_cost(B, A), Err(GraphError::EdgeNotFound { from: B, to: A }));
        assert_eq!(g.edge_pheromone(A, D), Err(GraphError::EdgeNotFound { from: A, to: D }));
        assert!(!g.contains_edge(B, A));
        assert!(g.contains_edge(A, B));
    }

    #[test]
    fn zero_cost_is_rejected() {
        let mut g = PheromoneGraph::new();
        assert_eq!(g.add_edge(A, B, 0), Err(GraphError::ZeroCost { from: A, to: B }));
        assert!(g.is_empty());
    }

    #[test]
    fn duplicate_registration_overwrites_cost_and_keeps_pheromone() {
        let mut g = fork();
        g.queue_pheromone_increment(A, B, 4).unwrap();
        g.commit_pheromone_updates();

        g.add_edge(A, B, 9).unwrap();
        assert_eq!(g.edge_cost(A, B), Ok(9));
        assert_eq!(g.edge_pheromone(A, B), Ok(5));
        assert_eq!(g.successors(A), &[B, C], "successor list must not grow");
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn start_is_defined_once() {
        let mut g = fork();
        assert_eq!(g.require_start(), Ok(A));
        assert!(g.define_start(A).is_ok(), "same node again is fine");
        assert_eq!(
            g.define_start(B),
            Err(GraphError::StartAlreadyDefined { existing: A, requested: B })
        );
    }

    #[test]
    fn edges_iterate_in_node_then_successor_order() {
        let mut g = PheromoneGraph::new();
        g.add_edge(B, C, 3).unwrap();
        g.add_edge(A, B, 2).unwrap();
        g.add_edge(A, C, 6).unwrap();
        let order: Vec<_> = g.edges().map(|e| (e.from, e.to)).collect();
        assert_eq!(order, vec![(B, C), (A, B), (A, C)]);
    }
}

// ── Two-phase pheromone update ────────────────────────────────────────────────

#[cfg(test)]
mod deferred_update {
    use super::helpers::*;
    use crate::GraphError;

    #[test]
    fn queued_increments_accumulate_until_commit() {
        let mut g = fork();
        g.queue_pheromone_increment_once(A, B).unwrap();
        g.queue_pheromone_increment_once(A, B).unwrap();

        assert_eq!(g.pending_increment(A, B), 2);
        assert_eq!(g.edge_pheromone(A, B), Ok(1), "not visible before commit");
        assert!(g.has_pending());

        assert_eq!(g.commit_pheromone_updates(), 1);
        assert_eq!(g.edge_pheromone(A, B), Ok(3));
        assert_eq!(g.pending_increment(A, B), 0);
        assert!(!g.has_pending());
    }

    #[test]
    fn empty_commit_is_a_noop() {
        let mut g = fork();
        g.queue_pheromone_increment(A, C, 2).unwrap();
        g.commit_pheromone_updates();
        assert_eq!(g.commit_pheromone_updates(), 0);
        assert_eq!(g.edge_pheromone(A, C), Ok(3));
    }

    #[test]
    fn discarded_increments_never_land() {
        let mut g = fork();
        g.queue_pheromone_increment(A, B, 2).unwrap();
        g.queue_pheromone_increment_once(A, C).unwrap();

        assert_eq!(g.discard_pending(), 2);
        assert!(!g.has_pending());
        assert_eq!(g.commit_pheromone_updates(), 0);
        assert_eq!(g.edge_pheromone(A, B), Ok(1));
        assert_eq!(g.discard_pending(), 0);
    }

    #[test]
    fn queue_on_missing_edge_fails_and_queues_nothing() {
        let mut g = fork();
        assert_eq!(
            g.queue_pheromone_increment(B, A, 2),
            Err(GraphError::EdgeNotFound { from: B, to: A })
        );
        assert!(!g.has_pending());
    }

    #[test]
    fn zero_amount_leaves_pending_empty() {
        let mut g = fork();
        g.queue_pheromone_increment(A, B, 0).unwrap();
        assert!(!g.has_pending());
    }

    #[test]
    fn commit_touches_every_pending_edge() {
        let mut g = fork();
        g.queue_pheromone_increment(A, B, 2).unwrap();
        g.queue_pheromone_increment(A, C, 5).unwrap();
        assert_eq!(g.commit_pheromone_updates(), 2);
        assert_eq!(g.edge_pheromone(A, B), Ok(3));
        assert_eq!(g.edge_pheromone(A, C), Ok(6));
    }
}

// ── PheromoneAccess & RoundBuffer ─────────────────────────────────────────────

#[cfg(test)]
mod access {
    use super::helpers::*;
    use crate::{EdgeKey, GraphError, PendingIncrements, PheromoneAccess, RoundBuffer};

    #[test]
    fn round_buffer_reads_committed_state_and_queues_locally() {
        let mut g = fork();
        let pending = {
            let mut buf = RoundBuffer::new(&g);
            buf.queue_pheromone_increment(A, B, 2).unwrap();
            assert_eq!(buf.edge_pheromone(A, B), Ok(1));
            assert_eq!(buf.successors(A), &[B, C]);
            assert_eq!(buf.pending().get(EdgeKey::new(A, B)), 2);
            buf.into_pending()
        };
        assert!(!g.has_pending(), "buffer must not touch the graph");

        g.merge_pending(pending).unwrap();
        assert_eq!(g.pending_increment(A, B), 2);
        g.commit_pheromone_updates();
        assert_eq!(g.edge_pheromone(A, B), Ok(3));
    }

    #[test]
    fn round_buffer_rejects_missing_edges() {
        let g = fork();
        let mut buf = RoundBuffer::new(&g);
        assert_eq!(
            buf.queue_pheromone_increment(C, A, 1),
            Err(GraphError::EdgeNotFound { from: C, to: A })
        );
        assert!(buf.pending().is_empty());
    }

    #[test]
    fn merge_with_unknown_edge_is_atomic() {
        let mut g = fork();
        let mut foreign = PendingIncrements::new();
        foreign.queue(EdgeKey::new(A, B), 2);
        foreign.queue(EdgeKey::new(B, D), 1);
        assert!(g.merge_pending(foreign).is_err());
        assert!(!g.has_pending());
    }

    #[test]
    fn graph_access_queues_into_own_pending_set() {
        fn reinforce(access: &mut impl PheromoneAccess) {
            access.queue_pheromone_increment(A, C, 2).unwrap();
        }
        let mut g = fork();
        reinforce(&mut g);
        assert_eq!(g.pending_increment(A, C), 2);
    }

    #[test]
    fn pending_merge_sums() {
        let mut a = PendingIncrements::new();
        a.queue(EdgeKey::new(A, B), 2);
        let mut b = PendingIncrements::new();
        b.queue(EdgeKey::new(A, B), 2);
        b.queue(EdgeKey::new(A, C), 1);
        a.merge(b);
        assert_eq!(a.get(EdgeKey::new(A, B)), 4);
        assert_eq!(a.get(EdgeKey::new(A, C)), 1);
        assert_eq!(a.len(), 2);
    }
}
