//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `unit_paths.csv`
//! - `round_summaries.csv`
//! - `pheromones.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PathSnapshotRow, PheromoneRow, RoundSummaryRow};

/// Writes colony output to three CSV files.
pub struct CsvWriter {
    paths:      Writer<File>,
    summaries:  Writer<File>,
    pheromones: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut paths = Writer::from_path(dir.join("unit_paths.csv"))?;
        paths.write_record(["unit_id", "round", "position", "state", "wait", "path"])?;

        let mut summaries = Writer::from_path(dir.join("round_summaries.csv"))?;
        summaries.write_record([
            "round", "advanced", "retreated", "waiting", "stranded", "committed_edges",
        ])?;

        let mut pheromones = Writer::from_path(dir.join("pheromones.csv"))?;
        pheromones.write_record(["from", "to", "cost", "pheromone"])?;

        Ok(Self {
            paths,
            summaries,
            pheromones,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_path_snapshots(&mut self, rows: &[PathSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.paths.write_record(&[
                row.unit_id.to_string(),
                row.round.to_string(),
                row.position.clone(),
                row.state.to_string(),
                row.wait.to_string(),
                row.path.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.round.to_string(),
            row.advanced.to_string(),
            row.retreated.to_string(),
            row.waiting.to_string(),
            row.stranded.to_string(),
            row.committed_edges.to_string(),
        ])?;
        Ok(())
    }

    fn write_pheromone_table(&mut self, rows: &[PheromoneRow]) -> OutputResult<()> {
        for row in rows {
            self.pheromones.write_record(&[
                row.from.clone(),
                row.to.clone(),
                row.cost.to_string(),
                row.pheromone.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.paths.flush()?;
        self.summaries.flush()?;
        self.pheromones.flush()?;
        Ok(())
    }
}
