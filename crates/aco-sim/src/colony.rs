//! The `Colony` struct and its round loop.

use aco_core::{ColonyConfig, Round, UnitId};
use aco_graph::{EdgeView, PheromoneGraph};
use aco_unit::{Unit, UnitRngs};
use tracing::{debug, info, trace};

use crate::{ColonyObserver, RoundSummary, SimError, SimResult};

/// What one unit produced during a parallel step phase.
#[cfg(feature = "parallel")]
type UnitStep = (UnitId, aco_unit::UnitResult<aco_unit::StepOutcome>, aco_graph::PendingIncrements);

/// The colony driver.
///
/// Owns the graph and the population and runs the two-step round:
///
/// 1. **Step**: every unit steps once in ascending `UnitId` order.  Units
///    read committed pheromone and may only queue increments.
/// 2. **Commit**: queued increments are applied in one call.
///
/// Create via [`ColonyBuilder`][crate::ColonyBuilder].
pub struct Colony {
    /// Construction-time configuration.
    pub config: ColonyConfig,

    /// Next round to execute.
    pub(crate) round: Round,

    pub(crate) graph: PheromoneGraph,

    /// Population, indexed by `UnitId`.
    pub(crate) units: Vec<Unit>,

    /// Per-unit RNGs, kept apart from `units` for the split-borrow pattern.
    pub(crate) rngs: UnitRngs,

    /// Dedicated pool when `config.num_threads` is set.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Colony {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// The next round to execute (equals the number of rounds completed).
    pub fn round(&self) -> Round {
        self.round
    }

    pub fn graph(&self) -> &PheromoneGraph {
        &self.graph
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.index())
    }

    /// Committed pheromone of every edge, in the graph's reporting order.
    pub fn pheromone_table(&self) -> Vec<EdgeView> {
        self.graph.edges().collect()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current round to `config.end_round()`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: ColonyObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_round();
        info!(
            units  = self.units.len(),
            from   = self.round.0,
            until  = end.0,
            "colony run started"
        );
        while self.round < end {
            self.observed_round(observer)?;
        }
        observer.on_run_end(self.round, &self.graph);
        info!(rounds = self.round.0, "colony run finished");
        Ok(())
    }

    /// Run exactly `n` rounds from the current position (ignores
    /// `end_round`).  Does not fire `on_run_end`.
    pub fn run_rounds<O: ColonyObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_round(observer)?;
        }
        Ok(())
    }

    /// Execute one round without an observer.
    pub fn step_round(&mut self) -> SimResult<RoundSummary> {
        let round = self.round;
        let mut summary = RoundSummary::new(round);

        self.step_units(round, &mut summary)?;
        summary.committed_edges = self.graph.commit_pheromone_updates();

        debug!(
            round     = round.0,
            advanced  = summary.advanced,
            retreated = summary.retreated,
            waiting   = summary.waiting,
            stranded  = summary.stranded,
            committed = summary.committed_edges,
            "round complete"
        );

        self.round = round.next();
        Ok(summary)
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn observed_round<O: ColonyObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let round = self.round;
        observer.on_round_start(round);
        let summary = self.step_round()?;
        observer.on_round_end(&summary);
        if self.config.is_snapshot_round(round) {
            observer.on_snapshot(round, &self.units);
        }
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn step_units(&mut self, round: Round, summary: &mut RoundSummary) -> SimResult<()> {
        for (unit, rng) in self.units.iter_mut().zip(self.rngs.inner.iter_mut()) {
            let id = unit.id();
            let outcome = match unit.step(&mut self.graph, rng) {
                Ok(outcome) => outcome,
                Err(source) => {
                    // Earlier units' increments must not outlive a failed round.
                    self.graph.discard_pending();
                    return Err(SimError::Unit { unit: id, round, source });
                }
            };
            trace!(unit = id.0, ?outcome, "unit stepped");
            summary.record(outcome);
        }
        Ok(())
    }

    /// Parallel step phase.
    ///
    /// Each unit gets a [`RoundBuffer`](aco_graph::RoundBuffer) over the
    /// shared graph.  Buffers are merged in ascending `UnitId` order; since
    /// every unit owns its RNG stream and reads only committed pheromone,
    /// the result matches the sequential path exactly.
    #[cfg(feature = "parallel")]
    fn step_units(&mut self, round: Round, summary: &mut RoundSummary) -> SimResult<()> {
        use aco_graph::RoundBuffer;
        use rayon::prelude::*;

        let graph = &self.graph;
        let units = &mut self.units;
        let rngs  = &mut self.rngs.inner;

        let mut produce = || -> Vec<UnitStep> {
            units
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .map(|(unit, rng)| {
                    let mut buffer = RoundBuffer::new(graph);
                    let outcome = unit.step(&mut buffer, rng);
                    (unit.id(), outcome, buffer.into_pending())
                })
                .collect()
        };

        let results = match &self.pool {
            Some(pool) => pool.install(&mut produce),
            None       => produce(),
        };

        let merged = self.merge_results(results, round, summary);
        if merged.is_err() {
            // Buffers merged before the failure must not outlive the round.
            self.graph.discard_pending();
        }
        merged
    }

    #[cfg(feature = "parallel")]
    fn merge_results(
        &mut self,
        results: Vec<UnitStep>,
        round:   Round,
        summary: &mut RoundSummary,
    ) -> SimResult<()> {
        for (id, outcome, pending) in results {
            let outcome = outcome.map_err(|source| SimError::Unit { unit: id, round, source })?;
            trace!(unit = id.0, ?outcome, "unit stepped");
            self.graph.merge_pending(pending)?;
            summary.record(outcome);
        }
        Ok(())
    }
}
