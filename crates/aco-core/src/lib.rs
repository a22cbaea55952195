//! `aco-core` — foundational types for the `rust_aco` colony simulator.
//!
//! Every other `aco-*` crate depends on this one.  It has no `aco-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`ids`]    | `NodeId`, `UnitId`                               |
//! | [`round`]  | `Round`, `ColonyConfig`                          |
//! | [`rng`]    | `UnitRng` (one independent stream per unit)      |
//! | [`error`]  | `AcoError`, `AcoResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config.      |

pub mod error;
pub mod ids;
pub mod rng;
pub mod round;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AcoError, AcoResult};
pub use ids::{NodeId, UnitId};
pub use rng::UnitRng;
pub use round::{ColonyConfig, Round};
