//! Colony observer trait for progress reporting and data collection.

use aco_core::Round;
use aco_graph::PheromoneGraph;
use aco_unit::Unit;

use crate::RoundSummary;

/// Callbacks invoked by [`Colony::run`][crate::Colony::run] at round
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ColonyObserver for ProgressPrinter {
///     fn on_round_end(&mut self, summary: &RoundSummary) {
///         if summary.round.0 % self.interval == 0 {
///             println!("{}: {} retreats", summary.round, summary.retreated);
///         }
///     }
/// }
/// ```
pub trait ColonyObserver {
    /// Called at the very start of each round, before any unit steps.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called after the round's pheromone commit.
    fn on_round_end(&mut self, _summary: &RoundSummary) {}

    /// Called on snapshot rounds (every `config.snapshot_interval_rounds`)
    /// with read-only access to every unit, for path visualisation.
    fn on_snapshot(&mut self, _round: Round, _units: &[Unit]) {}

    /// Called once after the final round with the committed graph.
    fn on_run_end(&mut self, _final_round: Round, _graph: &PheromoneGraph) {}
}

/// A [`ColonyObserver`] that does nothing.
pub struct NoopObserver;

impl ColonyObserver for NoopObserver {}
