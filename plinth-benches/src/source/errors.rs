//! Error types for synthetic workload generation.

use plinth_core::GraphError;

/// Errors that may occur while preparing benchmark workloads.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The maximum edge weight was negative.
    #[error("maximum edge weight must be non-negative (got {max_weight})")]
    NegativeMaxWeight {
        /// The rejected maximum weight.
        max_weight: i64,
    },
    /// The generated graph rejected a vertex or edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}
