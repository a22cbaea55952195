use aco_core::{AcoError, Round, UnitId};
use aco_graph::GraphError;
use aco_unit::UnitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("colony configuration error: {0}")]
    Config(#[from] AcoError),

    #[error("failed to spawn population: {0}")]
    Spawn(#[source] UnitError),

    #[error("unit {unit} failed in round {round}: {source}")]
    Unit {
        unit:   UnitId,
        round:  Round,
        #[source]
        source: UnitError,
    },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[cfg(feature = "parallel")]
    #[error("could not build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
