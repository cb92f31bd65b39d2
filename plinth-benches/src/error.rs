//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` so each bench reports one
//! readable message instead of unwrapping.

use plinth_core::{GraphError, TreeArrayError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic workload generation failed.
    #[error("synthetic workload generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A graph algorithm rejected its input.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// A positional update was out of range.
    #[error("tree array operation failed: {0}")]
    TreeArray(#[from] TreeArrayError),
}
