use plinth_core::{Graph, VertexId, Weight};

/// Edges of the nine-vertex reference graph.
pub const NINE_VERTEX_EDGES: &[(VertexId, VertexId, Weight)] = &[
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

#[must_use]
pub fn nine_vertex_graph() -> Graph {
    let mut graph = Graph::new();
    for vertex in 0..9 {
        graph.create_vertex(vertex).expect("fresh vertex");
    }
    for &(left, right, weight) in NINE_VERTEX_EDGES {
        graph.create_edge(left, right, weight).expect("valid edge");
    }
    graph
}
