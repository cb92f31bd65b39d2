//! Shared test utilities for `plinth-core`.

use plinth_test_support::profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Graph, VertexId, Weight};

/// Edges of the nine-vertex reference graph used across graph algorithm
/// tests. Its minimum spanning tree weighs 37 and the shortest path from 0 to
/// 6 is `0 -> 7 -> 6` with weight 9.
pub(crate) const NINE_VERTEX_EDGES: &[(VertexId, VertexId, Weight)] = &[
    (0, 1, 4),
    (0, 7, 8),
    (1, 2, 8),
    (7, 8, 7),
    (7, 6, 1),
    (2, 8, 2),
    (2, 5, 4),
    (2, 3, 7),
    (8, 6, 6),
    (6, 5, 2),
    (3, 5, 14),
    (3, 4, 9),
    (5, 4, 10),
];

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `PLINTH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph with vertices `0..vertex_count` and the given edges.
///
/// # Panics
/// Panics when an edge is rejected; fixtures are expected to be valid.
#[must_use]
pub(crate) fn graph_from_edges(
    vertex_count: usize,
    edges: &[(VertexId, VertexId, Weight)],
) -> Graph {
    let mut graph = Graph::new();
    for vertex in 0..vertex_count {
        graph.create_vertex(vertex).expect("fixture vertices are unique");
    }
    for &(left, right, weight) in edges {
        graph
            .create_edge(left, right, weight)
            .expect("fixture edges are valid");
    }
    graph
}

/// Builds the nine-vertex reference graph.
#[must_use]
pub(crate) fn nine_vertex_graph() -> Graph {
    graph_from_edges(9, NINE_VERTEX_EDGES)
}
