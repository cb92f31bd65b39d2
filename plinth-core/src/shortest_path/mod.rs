//! Single-source shortest paths by queue-driven relaxation.
//!
//! The search is label-correcting: vertices are processed from a FIFO queue
//! and re-queued whenever a shorter distance to them is found, so a vertex may
//! be processed more than once. With non-negative weights the final labels are
//! exact. Distance, parent and visit count live together in one
//! [`HashTable`] entry per reached vertex. Relaxations whose sum overflows
//! [`Weight`] are never improvements and are skipped.

use std::collections::VecDeque;

use tracing::{Span, field, info, instrument};

use crate::{
    error::GraphError,
    graph::{Graph, VertexId, Weight},
    hashtable::{HashTable, identity_hash},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct VertexState {
    distance: Option<Weight>,
    parent: Option<VertexId>,
    visits: usize,
}

/// Labels left behind once the queue drains.
struct Relaxed {
    states: HashTable<VertexId, VertexState>,
    /// First relaxation towards an unlabelled vertex whose sum overflowed.
    overflow: Option<GraphError>,
}

/// A minimum-weight path between two vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    source: VertexId,
    target: VertexId,
    path: Vec<VertexId>,
    distance: Weight,
}

impl ShortestPath {
    /// Returns the vertices from source to target, both included.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &[VertexId] { &self.path }

    /// Returns the summed weight of the path.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> Weight { self.distance }

    /// Returns the first vertex of the path.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the last vertex of the path.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Consumes the result and returns the vertex sequence.
    #[must_use]
    pub fn into_path(self) -> Vec<VertexId> {
        self.path
    }
}

/// Finds a minimum-weight path from `source` to `target`.
///
/// The computed distance is reported through an `info` event carrying the
/// `source`, `target` and `distance` fields. The span records how many
/// relaxations succeeded and how many times a vertex was taken off the queue.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] when either endpoint is absent,
/// [`GraphError::TargetUnreachable`] when no path connects them and
/// [`GraphError::WeightOverflow`] when the target is connected but every path
/// to it weighs more than `i64::MAX`.
///
/// # Examples
/// ```
/// use plinth_core::{Graph, shortest_path};
///
/// let mut graph = Graph::new();
/// for vertex in 0..3 {
///     graph.create_vertex(vertex).expect("fresh vertex");
/// }
/// graph.create_edge(0, 1, 1).expect("valid edge");
/// graph.create_edge(1, 2, 1).expect("valid edge");
/// graph.create_edge(0, 2, 5).expect("valid edge");
///
/// let route = shortest_path(&graph, 0, 2).expect("reachable");
/// assert_eq!(route.path(), &[0, 1, 2]);
/// assert_eq!(route.distance(), 2);
/// ```
#[instrument(
    name = "core.shortest_path",
    err,
    skip(graph),
    fields(relaxations = field::Empty, processed = field::Empty),
)]
pub fn shortest_path(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> Result<ShortestPath, GraphError> {
    for vertex in [source, target] {
        if !graph.contains_vertex(vertex) {
            return Err(GraphError::VertexNotFound { vertex });
        }
    }

    let Relaxed { states, overflow } = relax_from(graph, source)?;

    let Some(distance) = states.get(&target).and_then(|state| state.distance) else {
        return Err(match overflow {
            Some(error) if connected(graph, source, target)? => error,
            _ => GraphError::TargetUnreachable {
                from: source,
                to: target,
            },
        });
    };
    let path = backtrack(&states, source, target, graph.vertex_count())?;

    info!(source, target, distance, "shortest distance computed");
    Ok(ShortestPath {
        source,
        target,
        path,
        distance,
    })
}

fn relax_from(graph: &Graph, source: VertexId) -> Result<Relaxed, GraphError> {
    let mut states: HashTable<VertexId, VertexState> = HashTable::new(identity_hash);
    states.set(
        source,
        VertexState {
            distance: Some(0),
            ..VertexState::default()
        },
    );
    let mut queue = VecDeque::from([source]);
    let mut relaxations = 0_usize;
    let mut overflow = None;

    while let Some(current) = queue.pop_front() {
        let state = states
            .get_mut(&current)
            .ok_or(GraphError::InvariantViolation {
                invariant: "queued vertex must have a recorded state",
            })?;
        state.visits = state.visits.saturating_add(1);
        let current_distance = state.distance.ok_or(GraphError::InvariantViolation {
            invariant: "queued vertex must have a tentative distance",
        })?;

        for (neighbour, weight) in graph.weighted_neighbors(current)? {
            let previous = states.get(&neighbour).copied().unwrap_or_default();
            // An overflowing candidate exceeds every representable label.
            let Some(candidate) = current_distance.checked_add(weight) else {
                if previous.distance.is_none() && overflow.is_none() {
                    overflow = Some(GraphError::WeightOverflow {
                        total: current_distance,
                        weight,
                    });
                }
                continue;
            };
            let improved = previous.distance.is_none_or(|known| candidate < known);
            if !improved {
                continue;
            }

            states.set(
                neighbour,
                VertexState {
                    distance: Some(candidate),
                    parent: Some(current),
                    visits: previous.visits,
                },
            );
            queue.push_back(neighbour);
            relaxations = relaxations.saturating_add(1);
        }
    }

    let processed: usize = states.iter().map(|(_, state)| state.visits).sum();
    let span = Span::current();
    span.record("relaxations", relaxations);
    span.record("processed", processed);
    Ok(Relaxed { states, overflow })
}

/// Plain breadth-first reachability, ignoring weights.
fn connected(graph: &Graph, source: VertexId, target: VertexId) -> Result<bool, GraphError> {
    let mut seen: HashTable<VertexId, ()> = HashTable::new(identity_hash);
    seen.set(source, ());
    let mut queue = VecDeque::from([source]);
    while let Some(current) = queue.pop_front() {
        if current == target {
            return Ok(true);
        }
        for neighbour in graph.neighbors(current)? {
            if seen.set(neighbour, ()).is_none() {
                queue.push_back(neighbour);
            }
        }
    }
    Ok(false)
}

fn backtrack(
    states: &HashTable<VertexId, VertexState>,
    source: VertexId,
    target: VertexId,
    vertex_count: usize,
) -> Result<Vec<VertexId>, GraphError> {
    let mut path = vec![target];
    let mut cursor = target;
    while cursor != source {
        if path.len() > vertex_count {
            return Err(GraphError::InvariantViolation {
                invariant: "parent chain must reach the source without repeating",
            });
        }
        cursor = states
            .get(&cursor)
            .and_then(|state| state.parent)
            .ok_or(GraphError::InvariantViolation {
                invariant: "reached vertex must record a parent",
            })?;
        path.push(cursor);
    }
    path.reverse();
    Ok(path)
}
