//! `ColonyOutputObserver<W>` — bridges `ColonyObserver` to an `OutputWriter`.

use aco_core::Round;
use aco_graph::PheromoneGraph;
use aco_sim::{ColonyObserver, RoundSummary};
use aco_unit::Unit;

use crate::report::{path_snapshot, pheromone_report};
use crate::row::RoundSummaryRow;
use crate::writer::OutputWriter;
use crate::{NodeLabels, OutputError, OutputResult};

/// A [`ColonyObserver`] that writes round summaries, path snapshots, and the
/// final pheromone table to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ColonyObserver`
/// methods have no return value.  After `colony.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ColonyOutputObserver<W: OutputWriter> {
    writer:     W,
    labels:     NodeLabels,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ColonyOutputObserver<W> {
    pub fn new(writer: W, labels: NodeLabels) -> Self {
        Self { writer, labels, last_error: None }
    }

    /// Take the stored write error (if any) after `colony.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn labels(&self) -> &NodeLabels {
        &self.labels
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ColonyObserver for ColonyOutputObserver<W> {
    fn on_round_end(&mut self, summary: &RoundSummary) {
        let row = RoundSummaryRow {
            round:           summary.round.0,
            advanced:        summary.advanced as u64,
            retreated:       summary.retreated as u64,
            waiting:         summary.waiting as u64,
            stranded:        summary.stranded as u64,
            committed_edges: summary.committed_edges as u64,
        };
        let result = self.writer.write_round_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, round: Round, units: &[Unit]) {
        let rows = path_snapshot(round, units, &self.labels);
        if !rows.is_empty() {
            let result = self.writer.write_path_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_round: Round, graph: &PheromoneGraph) {
        let rows = pheromone_report(graph, &self.labels);
        let result = self.writer.write_pheromone_table(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
