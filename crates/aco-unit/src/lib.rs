//! `aco-unit` — traversal units and their FORWARD/BACKWARD state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`state`]      | `TraversalState`, `StepOutcome`                         |
//! | [`unit`]       | `Unit` — position, path stack, transit countdown        |
//! | [`select`]     | Pheromone-squared weighted successor selection          |
//! | [`population`] | `UnitRngs`, `spawn_units`                               |
//! | [`error`]      | `UnitError`, `UnitResult<T>`                            |
//!
//! # Movement model
//!
//! A unit starts at the graph's start node heading FORWARD.  Each tick it
//! either waits out the cost of the edge it is on, picks a successor, or
//! retreats one edge along its recorded path:
//!
//! 1. `wait > 0` — count down, nothing else.
//! 2. FORWARD — pick a successor with probability proportional to
//!    `pheromone²`, push it on the path, and wait for the edge cost.  A node
//!    without successors flips the unit to BACKWARD in the same tick.
//! 3. BACKWARD — pop the current node, queue a double pheromone increment
//!    on the edge being retreated across, and wait for its cost.  Once the
//!    path is exhausted the unit is back at the start and turns FORWARD in
//!    the same tick.

pub mod error;
pub mod population;
pub mod select;
pub mod state;
pub mod unit;


pub use error::{UnitError, UnitResult};
pub use population::{UnitRngs, spawn_units};
pub use select::{pheromone_weight, select_weighted};
pub use state::{StepOutcome, TraversalState};
pub use unit::{RETREAT_REINFORCEMENT, Unit};
