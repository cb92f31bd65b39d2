//! Read-only edge records produced by [`super::Graph::edges`].

use super::{VertexId, Weight};

/// A single undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

impl Edge {
    /// Builds a canonical edge from endpoints given in either order.
    #[must_use]
    pub(crate) const fn canonical(left: VertexId, right: VertexId, weight: Weight) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}
