use aco_core::{NodeId, UnitId};
use aco_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("unit {0} tried to retreat with an empty path")]
    EmptyPath(UnitId),

    #[error("unit {unit} drew a ticket outside the successor weights of {node}")]
    SelectionExhausted { unit: UnitId, node: NodeId },

    #[error("population of {0} units exceeds the UnitId range")]
    PopulationTooLarge(usize),

    #[error("graph inconsistency: {0}")]
    Graph(#[from] GraphError),
}

pub type UnitResult<T> = Result<T, UnitError>;
