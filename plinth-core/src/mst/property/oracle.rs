//! Brute-force spanning forest oracle.
//!
//! Enumerates every subset of edges, keeps those that form a spanning forest
//! of maximum size, and reports the minimum total weight among them. Only
//! suitable for graphs with a handful of edges.

use crate::graph::{Edge, Weight};

/// Maximum number of edges the oracle will enumerate.
pub(super) const MAX_ORACLE_EDGES: usize = 12;

/// Finds the root of `node`, halving the path as it goes.
pub(super) fn find_root(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        let grandparent = parent[parent[current]];
        parent[current] = grandparent;
        current = grandparent;
    }
    current
}

/// Returns `Some(count)` when `edges` form a forest over `0..vertex_count`,
/// where `count` is the number of components, and `None` when they contain
/// a cycle.
pub(super) fn forest_components(vertex_count: usize, edges: &[Edge]) -> Option<usize> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for edge in edges {
        let source_root = find_root(&mut parent, edge.source());
        let target_root = find_root(&mut parent, edge.target());
        if source_root == target_root {
            return None;
        }
        parent[target_root] = source_root;
        components -= 1;
    }
    Some(components)
}

/// Returns the minimum weight over all maximum spanning forests of the
/// graph described by `edges`.
pub(super) fn brute_force_minimum_weight(vertex_count: usize, edges: &[Edge]) -> Weight {
    assert!(edges.len() <= MAX_ORACLE_EDGES, "oracle input too large");

    let wanted = vertex_count - connected_components(vertex_count, edges);

    let mut best: Option<Weight> = None;
    for mask in 0u32..(1u32 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let subset: Vec<Edge> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if forest_components(vertex_count, &subset).is_none() {
            continue;
        }
        let weight: Weight = subset.iter().map(Edge::weight).sum();
        best = Some(best.map_or(weight, |current| current.min(weight)));
    }
    best.unwrap_or(0)
}

/// Counts connected components ignoring cycles.
pub(super) fn connected_components(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for edge in edges {
        let source_root = find_root(&mut parent, edge.source());
        let target_root = find_root(&mut parent, edge.target());
        if source_root != target_root {
            parent[target_root] = source_root;
            components -= 1;
        }
    }
    components
}
