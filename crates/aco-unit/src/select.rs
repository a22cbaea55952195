//! Pheromone-squared weighted successor selection.
//!
//! Each candidate `v` of node `u` gets weight `pheromone(u, v)²`.  A ticket
//! `r` is drawn uniformly from `[1, Σ weight]` and the candidates are walked
//! in their fixed order, subtracting each weight from `r` until
//! `r <= weight(v)`.  Squaring biases selection super-linearly toward
//! reinforced edges while keeping everything in integer arithmetic.

use aco_core::{NodeId, UnitId, UnitRng};
use aco_graph::PheromoneAccess;

use crate::{UnitError, UnitResult};

/// Sampling weight of an edge with the given pheromone strength.
#[inline]
pub fn pheromone_weight(pheromone: u64) -> u64 {
    pheromone.saturating_mul(pheromone)
}

/// Index of the candidate selected by `ticket`, where `ticket` is in
/// `[1, weights.iter().sum()]`.
///
/// Returns `None` if the ticket exceeds the total weight.
pub fn select_weighted(weights: &[u64], ticket: u64) -> Option<usize> {
    let mut remaining = ticket;
    for (i, &w) in weights.iter().enumerate() {
        if remaining <= w {
            return Some(i);
        }
        remaining -= w;
    }
    None
}

/// Draw one successor of `from` from `candidates` (non-empty).
pub(crate) fn choose_successor<G: PheromoneAccess + ?Sized>(
    graph:      &G,
    unit:       UnitId,
    from:       NodeId,
    candidates: &[NodeId],
    rng:        &mut UnitRng,
) -> UnitResult<NodeId> {
    let weights = candidates
        .iter()
        .map(|&to| graph.edge_pheromone(from, to).map(pheromone_weight))
        .collect::<Result<Vec<u64>, _>>()?;

    // Pheromone is always >= 1, so the total is >= 1 for a non-empty list.
    let total = weights.iter().fold(0u64, |acc, &w| acc.saturating_add(w));
    if total == 0 {
        return Err(UnitError::SelectionExhausted { unit, node: from });
    }

    let ticket = rng.draw_ticket(total);
    select_weighted(&weights, ticket)
        .map(|i| candidates[i])
        .ok_or(UnitError::SelectionExhausted { unit, node: from })
}
