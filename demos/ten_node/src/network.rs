//! The ten-node lattice explored by the demo colony.
//!
//! Nodes A–J map to ids 1–10.  A is the nest; every path eventually drains
//! into I, the only node without successors.

use aco_core::NodeId;
use aco_graph::{GraphResult, PheromoneGraph};
use aco_output::NodeLabels;

const A: NodeId = NodeId(1);
const B: NodeId = NodeId(2);
const C: NodeId = NodeId(3);
const D: NodeId = NodeId(4);
const E: NodeId = NodeId(5);
const F: NodeId = NodeId(6);
const G: NodeId = NodeId(7);
const H: NodeId = NodeId(8);
const I: NodeId = NodeId(9);
const J: NodeId = NodeId(10);

/// `(from, to, cost)` in registration order.
const EDGES: [(NodeId, NodeId, u32); 18] = [
    (A, B, 2),
    (A, C, 6),
    (A, D, 4),
    (B, E, 2),
    (B, C, 3),
    (C, E, 5),
    (C, F, 12),
    (C, G, 2),
    (D, C, 2),
    (D, G, 5),
    (E, H, 4),
    (E, F, 7),
    (F, I, 6),
    (F, J, 4),
    (G, F, 3),
    (G, J, 6),
    (H, I, 1),
    (J, I, 7),
];

pub fn labels() -> NodeLabels {
    NodeLabels::from_symbols([
        ("A", A), ("B", B), ("C", C), ("D", D), ("E", E),
        ("F", F), ("G", G), ("H", H), ("I", I), ("J", J),
    ])
}

/// Build the lattice with its start at A.
pub fn build_network() -> GraphResult<PheromoneGraph> {
    let mut graph = PheromoneGraph::new();
    for (from, to, cost) in EDGES {
        graph.add_edge(from, to, cost)?;
    }
    graph.define_start(A)?;
    Ok(graph)
}
