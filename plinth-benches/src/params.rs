//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label.

use std::fmt;

use crate::source::InsertionPattern;

/// Parameters for a graph algorithm benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Target average number of edges per vertex.
    pub edges_per_vertex: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.vertex_count, self.edges_per_vertex)
    }
}

/// Parameters for a container benchmark run.
#[derive(Clone, Debug)]
pub struct ContainerBenchParams {
    /// Number of elements inserted.
    pub element_count: usize,
}

impl fmt::Display for ContainerBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.element_count)
    }
}

/// Parameters for a tree array build benchmark run.
#[derive(Clone, Debug)]
pub struct InsertionBenchParams {
    /// Number of elements inserted.
    pub element_count: usize,
    /// Where each element is inserted.
    pub pattern: InsertionPattern,
}

impl fmt::Display for InsertionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.element_count, self.pattern)
    }
}
