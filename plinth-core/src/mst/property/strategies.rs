//! Graph generation strategies for spanning forest property tests.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::{
    graph::{Graph, VertexId, Weight},
    test_utils::graph_from_edges,
};

use super::oracle::MAX_ORACLE_EDGES;

/// Upper bound on vertices for graphs checked against the oracle.
const SMALL_MAX_VERTICES: usize = 7;
/// Upper bound on vertices for structural checks.
const LARGE_MAX_VERTICES: usize = 40;
/// Upper bound on edges for structural checks.
const LARGE_MAX_EDGES: usize = 160;

/// Weight distribution for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    #[weight(2)]
    Spread,
    /// Weights drawn from `0..=2`, so most edges tie.
    #[weight(3)]
    ManyIdentical,
}

impl WeightDistribution {
    const fn max_weight(self) -> Weight {
        match self {
            Self::Spread => 1_000,
            Self::ManyIdentical => 2,
        }
    }
}

/// A generated graph description.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Vertices are `0..vertex_count`.
    pub vertex_count: usize,
    /// Unique undirected edges with `left < right`.
    pub edges: Vec<(VertexId, VertexId, Weight)>,
    /// Distribution the weights were drawn from.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Materialises the fixture as a [`Graph`].
    pub(super) fn graph(&self) -> Graph {
        graph_from_edges(self.vertex_count, &self.edges)
    }
}

fn all_pairs(vertex_count: usize) -> Vec<(VertexId, VertexId)> {
    (0..vertex_count)
        .flat_map(|left| ((left + 1)..vertex_count).map(move |right| (left, right)))
        .collect()
}

fn graph_strategy(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = GraphFixture> {
    (1usize..=max_vertices, any::<WeightDistribution>()).prop_flat_map(
        move |(vertex_count, distribution)| {
            let pairs = all_pairs(vertex_count);
            let edge_limit = pairs.len().min(max_edges);
            proptest::sample::subsequence(pairs, 0..=edge_limit)
                .prop_flat_map(move |chosen| {
                    let weights = proptest::collection::vec(
                        0..=distribution.max_weight(),
                        chosen.len(),
                    );
                    (Just(chosen), weights)
                })
                .prop_map(move |(chosen, weights)| GraphFixture {
                    vertex_count,
                    edges: chosen
                        .into_iter()
                        .zip(weights)
                        .map(|((left, right), weight)| (left, right, weight))
                        .collect(),
                    distribution,
                })
        },
    )
}

/// Graphs small enough for the brute-force oracle.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = GraphFixture> {
    graph_strategy(SMALL_MAX_VERTICES, MAX_ORACLE_EDGES)
}

/// Larger graphs for structural invariant checks.
pub(super) fn large_graph_strategy() -> impl Strategy<Value = GraphFixture> {
    graph_strategy(LARGE_MAX_VERTICES, LARGE_MAX_EDGES)
}
