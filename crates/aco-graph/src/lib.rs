//! `aco-graph` — pheromone graph and the deferred update buffer.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`graph`]   | `PheromoneGraph`, `EdgeKey`, `EdgeView`                      |
//! | [`pending`] | `PendingIncrements` — accumulate-now, apply-on-commit buffer |
//! | [`access`]  | `PheromoneAccess` trait, `RoundBuffer`                       |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                               |
//!
//! # Two-phase update
//!
//! Units never write pheromone directly.  During a round they queue
//! increments; the colony calls
//! [`PheromoneGraph::commit_pheromone_updates`] exactly once after every unit
//! has stepped.  Reads during the round therefore always see the values as
//! of the previous commit, whatever order units step in.

pub mod access;
pub mod error;
pub mod graph;
pub mod pending;

#[cfg(test)]
mod tests;

pub use access::{PheromoneAccess, RoundBuffer};
pub use error::{GraphError, GraphResult};
pub use graph::{EdgeKey, EdgeView, PheromoneGraph};
pub use pending::PendingIncrements;
