//! Checks the spans and events emitted by the instrumented operations.

mod common;

use plinth_core::{HashTable, identity_hash, minimum_spanning_forest, shortest_path};
use plinth_test_support::tracing::RecordingLayer;
use tracing::Level;

use common::nine_vertex_graph;

#[test]
fn shortest_path_span_records_endpoints_and_queue_work() {
    let graph = nine_vertex_graph();
    let (route, layer) = RecordingLayer::capture(|| shortest_path(&graph, 0, 6));
    assert_eq!(route.map(|route| route.distance()), Ok(9));

    let span = layer
        .span_named("core.shortest_path")
        .expect("core.shortest_path span must exist");
    assert_eq!(span.field("source"), Some("0"));
    assert_eq!(span.field("target"), Some("6"));
    let relaxations: usize = span
        .field("relaxations")
        .expect("relaxations recorded")
        .parse()
        .expect("numeric field");
    assert!(relaxations >= graph.vertex_count() - 1);
    // The source is queued once up front and every relaxation queues once more.
    assert_eq!(
        span.field("processed"),
        Some((relaxations + 1).to_string().as_str())
    );

    let events = layer.events_with_message("shortest distance computed");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::INFO);
    assert_eq!(events[0].field("distance"), Some("9"));
}

#[test]
fn failed_shortest_path_emits_error_event() {
    let graph = nine_vertex_graph();
    let (result, layer) = RecordingLayer::capture(|| shortest_path(&graph, 0, 42));
    assert!(result.is_err());
    assert!(layer.events_with_message("shortest distance computed").is_empty());
    assert!(
        layer
            .events()
            .iter()
            .any(|event| event.level == Level::ERROR
                && event.field("error") == Some("vertex 42 does not exist"))
    );
}

#[test]
fn spanning_forest_span_records_graph_size() {
    let graph = nine_vertex_graph();
    let (forest, layer) = RecordingLayer::capture(|| minimum_spanning_forest(&graph));
    assert!(forest.expect("MST must succeed").is_tree());

    let span = layer
        .span_named("core.minimum_spanning_forest")
        .expect("core.minimum_spanning_forest span must exist");
    assert_eq!(span.field("vertices"), Some("9"));
    assert_eq!(span.field("edges"), Some("13"));

    let events = layer.events_with_message("spanning forest complete");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].field("accepted"), Some("8"));
    assert_eq!(events[0].field("component_count"), Some("1"));
}

#[test]
fn growth_emits_a_debug_event_per_doubling() {
    let ((), layer) = RecordingLayer::capture(|| {
        let mut table = HashTable::new(identity_hash);
        for key in 0..5 {
            table.set(key, key * 10);
        }
        assert_eq!(table.capacity(), 16);
    });

    let capacities: Vec<(String, String)> = layer
        .events_with_message("hash table capacity doubled")
        .into_iter()
        .map(|event| {
            (
                event.field("old_capacity").unwrap_or_default().to_owned(),
                event.field("new_capacity").unwrap_or_default().to_owned(),
            )
        })
        .collect();
    assert_eq!(
        capacities,
        vec![
            ("4".to_owned(), "8".to_owned()),
            ("8".to_owned(), "16".to_owned()),
        ]
    );
}
