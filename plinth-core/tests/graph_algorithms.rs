//! End-to-end checks of the public graph API.

mod common;

use plinth_core::{
    DisjointSetUnion, Graph, GraphError, minimum_spanning_forest, shortest_path,
};
use rstest::{fixture, rstest};

use common::{NINE_VERTEX_EDGES, nine_vertex_graph};

#[fixture]
fn graph() -> Graph {
    nine_vertex_graph()
}

#[rstest]
fn reference_graph_shape(graph: Graph) {
    assert_eq!(graph.vertex_count(), 9);
    assert_eq!(graph.edge_count(), NINE_VERTEX_EDGES.len());
    assert_eq!(graph.edges().count(), NINE_VERTEX_EDGES.len());
    for &(left, right, weight) in NINE_VERTEX_EDGES {
        assert_eq!(graph.weight(left, right), Some(weight));
        assert_eq!(graph.weight(right, left), Some(weight));
    }
}

#[rstest]
fn spanning_tree_and_shortest_path_agree_on_reference_graph(graph: Graph) {
    let forest = minimum_spanning_forest(&graph).expect("MST must succeed");
    assert!(forest.is_tree());
    assert_eq!(forest.total_weight(), 37);

    let route = shortest_path(&graph, 0, 6).expect("6 is reachable");
    assert_eq!(route.path(), &[0, 7, 6]);
    assert_eq!(route.distance(), 9);
}

#[rstest]
fn spanning_tree_connects_every_vertex(graph: Graph) {
    let forest = minimum_spanning_forest(&graph).expect("MST must succeed");
    let mut sets = DisjointSetUnion::new();
    for vertex in graph.vertices() {
        sets.create_set(vertex).expect("fresh element");
    }
    for edge in forest.edges() {
        assert!(graph.has_edge(edge.source(), edge.target()));
        sets.union(edge.source(), edge.target()).expect("tracked");
    }
    assert_eq!(sets.set_size(0), Ok(9));
}

#[rstest]
fn deleting_a_vertex_reroutes_paths(mut graph: Graph) {
    graph.delete_vertex(7).expect("vertex exists");
    assert_eq!(graph.edge_count(), NINE_VERTEX_EDGES.len() - 3);

    let route = shortest_path(&graph, 0, 6).expect("still reachable");
    assert_eq!(route.distance(), 4 + 8 + 4 + 2);
    assert_eq!(route.path(), &[0, 1, 2, 5, 6]);

    let forest = minimum_spanning_forest(&graph).expect("MST must succeed");
    assert_eq!(forest.component_count(), 1);
    assert_eq!(forest.edges().len(), 7);
}

#[rstest]
fn isolating_a_vertex_makes_it_unreachable(mut graph: Graph) {
    graph.delete_edge(3, 4).expect("edge exists");
    graph.delete_edge(5, 4).expect("edge exists");
    assert_eq!(graph.degree(4), Ok(0));
    assert_eq!(
        shortest_path(&graph, 0, 4),
        Err(GraphError::TargetUnreachable { from: 0, to: 4 })
    );

    let forest = minimum_spanning_forest(&graph).expect("MST must succeed");
    assert_eq!(forest.component_count(), 2);
    assert!(!forest.is_tree());
}
