//! Fixture types shared by the forest property tests.

use crate::Graph;

/// Weight layout used when generating a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Edge weights drawn from a continuous range.
    Unique,
    /// A small pool of weights shared by many edges, stressing ties.
    ManyIdentical,
    /// A random spanning tree plus a few extra edges.
    Sparse,
    /// Several components with no edges between them.
    Disconnected,
}

/// Generated input for one property run.
#[derive(Clone, Debug)]
pub(super) struct ForestFixture {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Edges as `(left, right, weight)` in input order.
    pub edges: Vec<(usize, usize, f64)>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl ForestFixture {
    /// Builds a graph registering every vertex before any edge.
    pub(super) fn graph(&self) -> Graph<usize> {
        let mut graph = Graph::new();
        for vertex in 0..self.vertex_count {
            graph.add_vertex(vertex);
        }
        for &(left, right, weight) in &self.edges {
            graph.add_edge(left, right, weight);
        }
        graph
    }
}
