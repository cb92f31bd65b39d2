//! Minimum spanning forest construction with Kruskal's algorithm.
//!
//! Edges are read through [`Graph::edges`], so the graph is never modified.
//! They are sorted by weight with a stable sort, which keeps equal weights in
//! encounter order, and each edge is accepted when its endpoints still lie in
//! different components of a [`DisjointSetUnion`].

use tracing::{debug, instrument};

use crate::{
    dsu::DisjointSetUnion,
    error::GraphError,
    graph::{Edge, Graph, Weight},
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    total_weight: Weight,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in non-decreasing weight order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of connected components, counting isolated
    /// vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }
}

/// Computes a minimum spanning forest of `graph` using Kruskal's algorithm.
///
/// # Errors
/// Returns [`GraphError::WeightOverflow`] when the accepted weights do not sum
/// within [`Weight`], and [`GraphError::DisjointSet`] only if the internal component
/// bookkeeping becomes inconsistent, which indicates a logic error.
///
/// # Examples
/// ```
/// use plinth_core::{Graph, minimum_spanning_forest};
///
/// let mut graph = Graph::new();
/// for vertex in 0..3 {
///     graph.create_vertex(vertex).expect("fresh vertex");
/// }
/// graph.create_edge(0, 1, 1).expect("valid edge");
/// graph.create_edge(1, 2, 2).expect("valid edge");
/// graph.create_edge(0, 2, 3).expect("valid edge");
///
/// let forest = minimum_spanning_forest(&graph).expect("forest");
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[instrument(
    name = "core.minimum_spanning_forest",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn minimum_spanning_forest(graph: &Graph) -> Result<MinimumSpanningForest, GraphError> {
    let mut candidates: Vec<Edge> = graph.edges().collect();
    candidates.sort_by_key(Edge::weight);

    let mut sets = DisjointSetUnion::new();
    for edge in &candidates {
        for vertex in [edge.source(), edge.target()] {
            if !sets.contains(vertex) {
                sets.create_set(vertex)?;
            }
        }
    }

    let target_edges = graph.vertex_count().saturating_sub(1);
    let mut accepted = Vec::with_capacity(target_edges);
    let mut total_weight: Weight = 0;
    for edge in candidates {
        let source_root = sets.find_set(edge.source())?;
        let target_root = sets.find_set(edge.target())?;
        if source_root == target_root {
            continue;
        }
        total_weight = total_weight
            .checked_add(edge.weight())
            .ok_or(GraphError::WeightOverflow {
                total: total_weight,
                weight: edge.weight(),
            })?;
        sets.union(source_root, target_root)?;
        accepted.push(edge);
        if accepted.len() == target_edges {
            break;
        }
    }

    let component_count = graph.vertex_count().saturating_sub(accepted.len());
    debug!(
        accepted = accepted.len(),
        total_weight,
        component_count,
        "spanning forest complete"
    );
    Ok(MinimumSpanningForest {
        edges: accepted,
        total_weight,
        component_count,
    })
}

#[cfg(test)]
mod property;
