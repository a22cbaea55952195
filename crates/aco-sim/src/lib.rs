//! `aco-sim` — round loop orchestrator for the rust_aco colony simulator.
//!
//! # Round loop
//!
//! ```text
//! for round in 0..config.total_rounds:
//!   ① Step    — every unit steps exactly once, ascending UnitId
//!               (parallel with the `parallel` feature).  Retreating units
//!               queue pheromone increments; nobody sees them yet.
//!   ② Commit  — PheromoneGraph::commit_pheromone_updates, exactly once.
//!   ③ Observe — round summary, plus a path snapshot on snapshot rounds.
//! ```
//!
//! Every unit reads the same committed pheromone for the whole round, so
//! stepping order never changes the aggregate outcome.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the step phase on Rayon's thread pool.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use aco_core::{ColonyConfig, NodeId};
//! use aco_graph::PheromoneGraph;
//! use aco_sim::{ColonyBuilder, NoopObserver};
//!
//! let mut graph = PheromoneGraph::new();
//! graph.add_edge(NodeId(1), NodeId(2), 2)?;
//! graph.define_start(NodeId(1))?;
//! let mut colony = ColonyBuilder::new(ColonyConfig::new(120, 1_000, 42), graph).build()?;
//! colony.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod colony;
pub mod error;
pub mod observer;
pub mod summary;


pub use builder::ColonyBuilder;
pub use colony::Colony;
pub use error::{SimError, SimResult};
pub use observer::{ColonyObserver, NoopObserver};
pub use summary::RoundSummary;
