//! Spawning the unit population and its per-unit RNGs.
//!
//! # Why two collections?
//!
//! A parallel round needs `&mut Unit` and `&mut UnitRng` for the same unit
//! while the graph is shared.  Keeping RNGs in a separate `UnitRngs` lets
//! the colony zip the two `Vec`s and hand out disjoint mutable borrows.

use aco_core::{UnitId, UnitRng};
use aco_graph::PheromoneGraph;

use crate::{Unit, UnitError, UnitResult};

/// Per-unit deterministic RNG state, indexed by `UnitId`.
pub struct UnitRngs {
    pub inner: Vec<UnitRng>,
}

impl UnitRngs {
    /// Allocate and seed `count` per-unit RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> UnitResult<Self> {
        let inner = (0..count)
            .map(|i| unit_id(i, count).map(|id| UnitRng::new(global_seed, id)))
            .collect::<UnitResult<Vec<_>>>()?;
        Ok(Self { inner })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Create `count` units at the graph's start node, plus their RNGs.
///
/// Fails with [`GraphError::StartUndefined`](aco_graph::GraphError) if no
/// start has been designated.
pub fn spawn_units(
    graph: &PheromoneGraph,
    count: usize,
    seed:  u64,
) -> UnitResult<(Vec<Unit>, UnitRngs)> {
    let start = graph.require_start()?;
    let units = (0..count)
        .map(|i| unit_id(i, count).map(|id| Unit::new(id, start)))
        .collect::<UnitResult<Vec<_>>>()?;
    let rngs = UnitRngs::new(count, seed)?;
    Ok((units, rngs))
}

fn unit_id(index: usize, count: usize) -> UnitResult<UnitId> {
    UnitId::try_from(index).map_err(|_| UnitError::PopulationTooLarge(count))
}
