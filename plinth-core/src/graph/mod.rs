//! Undirected weighted graph stored as nested hash tables.
//!
//! The outer table maps each vertex to its adjacency row, and each row maps a
//! neighbour to the weight of the connecting edge. Every edge is mirrored in
//! both endpoint rows with the same weight; all mutation goes through methods
//! that keep the two rows consistent.

mod edge;

use crate::{
    error::GraphError,
    hashtable::{HashTable, identity_hash},
};

pub use self::edge::Edge;

/// Identifier of a graph vertex.
pub type VertexId = usize;

/// Edge weight. Weights stored in a [`Graph`] are never negative.
pub type Weight = i64;

type AdjacencyRow = HashTable<VertexId, Weight>;

/// Simple undirected graph with non-negative integer edge weights.
///
/// Self-loops and parallel edges are rejected.
///
/// # Examples
/// ```
/// use plinth_core::Graph;
///
/// let mut graph = Graph::new();
/// for vertex in [5, 6, 10] {
///     graph.create_vertex(vertex).expect("fresh vertex");
/// }
/// graph.create_edge(5, 10, 10).expect("valid edge");
/// graph.create_edge(6, 10, 1).expect("valid edge");
///
/// assert!(graph.has_edge(10, 5));
/// assert_eq!(graph.degree(10), Ok(2));
/// assert_eq!(graph.weight(6, 10), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    adjacency: HashTable<VertexId, AdjacencyRow>,
    edge_count: usize,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a graph with no vertices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: HashTable::new(identity_hash),
            edge_count: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when `vertex` exists.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Iterates over every vertex id in storage order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over every undirected edge exactly once, without mutating the
    /// graph.
    ///
    /// Edges come out at their first encounter: rows in vertex storage order,
    /// then neighbours in row order, skipping neighbours whose row was already
    /// walked. Endpoints are normalised so `edge.source() < edge.target()`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let mut walked: HashTable<VertexId, ()> = HashTable::new(identity_hash);
        self.adjacency.iter().flat_map(move |(&vertex, row)| {
            walked.set(vertex, ());
            row.iter()
                .filter(|&(neighbour, _)| !walked.contains_key(neighbour))
                .map(|(&neighbour, &weight)| Edge::canonical(vertex, neighbour, weight))
                .collect::<Vec<_>>()
        })
    }

    /// Adds an isolated vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexAlreadyExists`] when the vertex exists.
    pub fn create_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            return Err(GraphError::VertexAlreadyExists { vertex });
        }
        self.adjacency.set(vertex, HashTable::new(identity_hash));
        Ok(())
    }

    /// Removes `vertex` together with every edge touching it.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when the vertex is absent.
    pub fn delete_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        let neighbours = self.neighbors(vertex)?;
        for neighbour in &neighbours {
            self.row_mut(*neighbour)?.delete(&vertex)?;
        }
        self.adjacency.delete(&vertex)?;
        self.edge_count = self.edge_count.saturating_sub(neighbours.len());
        Ok(())
    }

    /// Connects `left` and `right` with an edge of the given weight.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when either endpoint is absent,
    /// [`GraphError::NegativeWeight`] for a negative weight,
    /// [`GraphError::SelfLoop`] when both endpoints are the same vertex, and
    /// [`GraphError::EdgeAlreadyExists`] when the edge is already present.
    pub fn create_edge(
        &mut self,
        left: VertexId,
        right: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.row(left)?;
        self.row(right)?;
        if weight < 0 {
            return Err(GraphError::NegativeWeight {
                left,
                right,
                weight,
            });
        }
        if left == right {
            return Err(GraphError::SelfLoop { vertex: left });
        }
        if self.has_edge(left, right) {
            return Err(GraphError::EdgeAlreadyExists { left, right });
        }

        self.row_mut(left)?.set(right, weight);
        self.row_mut(right)?.set(left, weight);
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    /// Removes the edge between `left` and `right`.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeNotFound`] when no such edge exists.
    pub fn delete_edge(&mut self, left: VertexId, right: VertexId) -> Result<(), GraphError> {
        if !self.has_edge(left, right) {
            return Err(GraphError::EdgeNotFound { left, right });
        }
        self.row_mut(left)?.delete(&right)?;
        self.row_mut(right)?.delete(&left)?;
        self.edge_count = self.edge_count.saturating_sub(1);
        Ok(())
    }

    /// Returns `true` when an edge connects `left` and `right`.
    ///
    /// Missing vertices simply have no edges.
    #[must_use]
    pub fn has_edge(&self, left: VertexId, right: VertexId) -> bool {
        self.weight(left, right).is_some()
    }

    /// Returns the weight of the edge between `left` and `right`, if any.
    #[must_use]
    pub fn weight(&self, left: VertexId, right: VertexId) -> Option<Weight> {
        self.adjacency.get(&left)?.get(&right).copied()
    }

    /// Returns the number of edges touching `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when the vertex is absent.
    pub fn degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        Ok(self.row(vertex)?.len())
    }

    /// Returns the neighbours of `vertex` in storage order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when the vertex is absent.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, GraphError> {
        Ok(self.row(vertex)?.keys().copied().collect())
    }

    /// Iterates over `(neighbour, weight)` pairs for `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when the vertex is absent.
    pub fn weighted_neighbors(
        &self,
        vertex: VertexId,
    ) -> Result<impl Iterator<Item = (VertexId, Weight)> + '_, GraphError> {
        Ok(self
            .row(vertex)?
            .iter()
            .map(|(&neighbour, &weight)| (neighbour, weight)))
    }

    fn row(&self, vertex: VertexId) -> Result<&AdjacencyRow, GraphError> {
        self.adjacency
            .get(&vertex)
            .ok_or(GraphError::VertexNotFound { vertex })
    }

    fn row_mut(&mut self, vertex: VertexId) -> Result<&mut AdjacencyRow, GraphError> {
        self.adjacency
            .get_mut(&vertex)
            .ok_or(GraphError::VertexNotFound { vertex })
    }
}
