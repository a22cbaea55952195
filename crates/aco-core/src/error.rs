//! Colony-wide error type.
//!
//! Sub-crates define their own error enums and wrap `AcoError` as one
//! variant where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `aco-core`.
#[derive(Debug, Error)]
pub enum AcoError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `aco-core`.
pub type AcoResult<T> = Result<T, AcoError>;
