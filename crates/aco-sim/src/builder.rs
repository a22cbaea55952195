//! Fluent builder for constructing a [`Colony`].

use aco_core::{ColonyConfig, NodeId, Round};
use aco_graph::PheromoneGraph;
use aco_unit::spawn_units;
use tracing::debug;

use crate::{Colony, SimError, SimResult};

/// Fluent builder for [`Colony`].
///
/// # Required inputs
///
/// - [`ColonyConfig`] — population size, round count, seed, …
/// - [`PheromoneGraph`] — the topology, fully registered
///
/// # Optional inputs
///
/// | Method         | Default                                   |
/// |----------------|-------------------------------------------|
/// | `.start(node)` | The start already defined on the graph    |
///
/// # Example
///
/// ```rust,ignore
/// let mut colony = ColonyBuilder::new(config, graph)
///     .start(NodeId(1))
///     .build()?;
/// colony.run(&mut NoopObserver)?;
/// ```
pub struct ColonyBuilder {
    config: ColonyConfig,
    graph:  PheromoneGraph,
    start:  Option<NodeId>,
}

impl ColonyBuilder {
    pub fn new(config: ColonyConfig, graph: PheromoneGraph) -> Self {
        Self { config, graph, start: None }
    }

    /// Designate the start node if the graph does not already have one.
    pub fn start(mut self, node: NodeId) -> Self {
        self.start = Some(node);
        self
    }

    /// Validate inputs, spawn the population at the start node, and return
    /// a ready-to-run [`Colony`].
    pub fn build(self) -> SimResult<Colony> {
        self.config.validate()?;

        let mut graph = self.graph;
        if let Some(start) = self.start {
            graph.define_start(start)?;
        }
        let start = graph.require_start()?;
        if graph.has_pending() {
            // Increments queued during construction belong to no round.
            graph.commit_pheromone_updates();
        }

        let (units, rngs) = spawn_units(&graph, self.config.unit_count, self.config.seed)
            .map_err(SimError::Spawn)?;

        debug!(
            units = units.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            start = start.0,
            "colony built"
        );

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        Ok(Colony {
            config: self.config,
            round:  Round::ZERO,
            graph,
            units,
            rngs,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
