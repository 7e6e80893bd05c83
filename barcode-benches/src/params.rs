//! Benchmark parameter types.

use std::fmt;

use crate::source::WeightProfile;

/// Parameters for a forest benchmark run.
#[derive(Clone, Debug)]
pub struct ForestBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Weight layout of the graph.
    pub weights: WeightProfile,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v={},e={},{}",
            self.vertex_count, self.edge_count, self.weights
        )
    }
}
