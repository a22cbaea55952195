//! Graph error type.

use thiserror::Error;

use aco_core::NodeId;

/// Errors produced by `aco-graph`.
///
/// `EdgeNotFound` signals a graph inconsistency: some caller asked about an
/// edge that was never registered.  It is never recovered from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {from} -> {to} is not registered")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("edge {from} -> {to} must have a positive cost")]
    ZeroCost { from: NodeId, to: NodeId },

    #[error("start node is not defined")]
    StartUndefined,

    #[error("start node already defined as {existing}, refusing {requested}")]
    StartAlreadyDefined { existing: NodeId, requested: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;
