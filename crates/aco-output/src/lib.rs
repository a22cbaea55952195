//! `aco-output` — reporting and output writers for the rust_aco colony
//! simulator.
//!
//! The only artifact of a run is its final pheromone table, keyed by
//! human-readable node symbols.  Round summaries and per-unit path snapshots
//! are optional extras for visualization tools.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`labels`]   | `NodeLabels` — `NodeId` ↔ symbol                      |
//! | [`report`]   | `pheromone_report`, `path_snapshot`                   |
//! | [`row`]      | Plain row types                                       |
//! | [`writer`]   | `OutputWriter` trait                                  |
//! | [`csv`]      | `CsvWriter`                                           |
//! | [`observer`] | `ColonyOutputObserver` bridging `ColonyObserver`      |
//!
//! # Usage
//!
//! ```rust,ignore
//! use aco_output::{ColonyOutputObserver, CsvWriter, NodeLabels};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ColonyOutputObserver::new(writer, labels);
//! colony.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod labels;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use labels::NodeLabels;
pub use observer::ColonyOutputObserver;
pub use report::{path_snapshot, pheromone_report};
pub use row::{PathSnapshotRow, PheromoneRow, RoundSummaryRow};
pub use writer::OutputWriter;
