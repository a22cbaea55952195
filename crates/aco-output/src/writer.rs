//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PathSnapshotRow, PheromoneRow, RoundSummaryRow};

/// Trait implemented by output backends.
///
/// [`ColonyOutputObserver`](crate::ColonyOutputObserver) keeps the first
/// error any method returns; read it with
/// [`take_error`](crate::ColonyOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of per-unit path snapshots.
    fn write_path_snapshots(&mut self, rows: &[PathSnapshotRow]) -> OutputResult<()>;

    /// Write one round summary row.
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()>;

    /// Write the pheromone table.
    fn write_pheromone_table(&mut self, rows: &[PheromoneRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calling it again after a successful finish does nothing.
    fn finish(&mut self) -> OutputResult<()>;
}
