//! Turning colony state into output rows.

use aco_core::Round;
use aco_graph::PheromoneGraph;
use aco_unit::Unit;

use crate::NodeLabels;
use crate::row::{PathSnapshotRow, PheromoneRow};

/// Every edge's committed pheromone, in the graph's reporting order (source
/// nodes in first-seen order, successors in registration order).
pub fn pheromone_report(graph: &PheromoneGraph, labels: &NodeLabels) -> Vec<PheromoneRow> {
    graph
        .edges()
        .map(|e| PheromoneRow {
            from:      labels.label(e.from).into_owned(),
            to:        labels.label(e.to).into_owned(),
            cost:      e.cost,
            pheromone: e.pheromone,
        })
        .collect()
}

/// One snapshot row per unit.
pub fn path_snapshot(round: Round, units: &[Unit], labels: &NodeLabels) -> Vec<PathSnapshotRow> {
    units
        .iter()
        .map(|u| PathSnapshotRow {
            unit_id:  u.id().0,
            round:    round.0,
            position: labels.label(u.position()).into_owned(),
            state:    u.state().as_str(),
            wait:     u.wait(),
            path:     u
                .path()
                .iter()
                .map(|&n| labels.label(n))
                .collect::<Vec<_>>()
                .join(">"),
        })
        .collect()
}
