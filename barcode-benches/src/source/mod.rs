//! Seeded synthetic graphs for benchmarking.
//!
//! Every graph is connected: a random path visits all vertices, then extra
//! random edges (possibly repeated pairs or self-loops) are appended.

use std::fmt;

use barcode_core::Graph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors raised by the synthetic generators.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested graph has no vertices.
    #[error("vertex_count must be greater than zero")]
    ZeroVertices,
}

/// How edge weights are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightProfile {
    /// Weights drawn uniformly from `[0.1, 100)`.
    Continuous,
    /// Weights drawn from the four values `1..=4`, producing many ties.
    Tied,
}

impl fmt::Display for WeightProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Continuous => "continuous",
            Self::Tied => "tied",
        })
    }
}

/// Configuration for [`synthetic_graph`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the connecting path.
    pub extra_edges_per_vertex: usize,
    /// Weight layout.
    pub weights: WeightProfile,
    /// Seed for the generator.
    pub seed: u64,
}

/// Generates a connected weighted graph from `config`.
///
/// # Errors
/// Returns [`SyntheticError::ZeroVertices`] when `vertex_count` is zero.
///
/// # Examples
/// ```
/// use barcode_benches::source::{SyntheticGraphConfig, WeightProfile, synthetic_graph};
///
/// let graph = synthetic_graph(&SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges_per_vertex: 2,
///     weights: WeightProfile::Continuous,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 29);
/// # Ok::<(), barcode_benches::source::SyntheticError>(())
/// ```
pub fn synthetic_graph(config: &SyntheticGraphConfig) -> Result<Graph<usize>, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new();

    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    for slot in (1..order.len()).rev() {
        let other = rng.gen_range(0..=slot);
        order.swap(slot, other);
    }
    graph.add_vertex(order.first().copied().unwrap_or_default());
    for pair in order.windows(2) {
        if let [left, right] = *pair {
            let weight = draw_weight(config.weights, &mut rng);
            graph.add_edge(left, right, weight);
        }
    }

    let extra = config
        .vertex_count
        .saturating_mul(config.extra_edges_per_vertex);
    for _ in 0..extra {
        let left = rng.gen_range(0..config.vertex_count);
        let right = rng.gen_range(0..config.vertex_count);
        let weight = draw_weight(config.weights, &mut rng);
        graph.add_edge(left, right, weight);
    }
    Ok(graph)
}

fn draw_weight(profile: WeightProfile, rng: &mut SmallRng) -> f64 {
    match profile {
        WeightProfile::Continuous => rng.gen_range(0.1..100.0),
        WeightProfile::Tied => f64::from(rng.gen_range(1_u8..=4)),
    }
}
