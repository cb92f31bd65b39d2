//! Random connected graphs for the spanning forest and shortest path
//! benchmarks.

use plinth_core::{Graph, VertexId, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::source::SyntheticError;

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, numbered `0..vertex_count`.
    pub vertex_count: usize,
    /// Target average number of edges per vertex.
    pub edges_per_vertex: usize,
    /// Largest edge weight drawn; weights are uniform in `0..=max_weight`.
    pub max_weight: Weight,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// A connected random graph.
///
/// A random spanning tree is laid down first so every vertex is reachable
/// from vertex 0; extra random edges are then added until the target edge
/// count is met or the attempt budget runs out.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: Graph,
}

impl SyntheticGraph {
    /// Generates a graph from the supplied configuration.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        validate_graph_config(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = Graph::new();
        for vertex in 0..config.vertex_count {
            graph.create_vertex(vertex)?;
        }

        for vertex in 1..config.vertex_count {
            let parent = rng.gen_range(0..vertex);
            graph.create_edge(parent, vertex, rng.gen_range(0..=config.max_weight))?;
        }

        let target = target_edge_count(config);
        let mut attempts = target.saturating_mul(4);
        while graph.edge_count() < target && attempts > 0 {
            attempts -= 1;
            let (left, right) = random_pair(&mut rng, config.vertex_count);
            if left == right || graph.has_edge(left, right) {
                continue;
            }
            graph.create_edge(left, right, rng.gen_range(0..=config.max_weight))?;
        }

        Ok(Self { graph })
    }

    /// Returns the generated graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the generator output and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

fn validate_graph_config(config: &SyntheticGraphConfig) -> Result<(), SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.max_weight < 0 {
        return Err(SyntheticError::NegativeMaxWeight {
            max_weight: config.max_weight,
        });
    }
    Ok(())
}

/// Clamps the requested edge count to the number of distinct vertex pairs.
fn target_edge_count(config: &SyntheticGraphConfig) -> usize {
    let n = config.vertex_count;
    let complete = n.saturating_mul(n.saturating_sub(1)) >> 1;
    n.saturating_mul(config.edges_per_vertex).min(complete)
}

fn random_pair(rng: &mut SmallRng, vertex_count: usize) -> (VertexId, VertexId) {
    (rng.gen_range(0..vertex_count), rng.gen_range(0..vertex_count))
}
