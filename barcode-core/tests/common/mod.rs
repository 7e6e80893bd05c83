use barcode_core::{Edge, WeightedGraph};

/// Minimal [`WeightedGraph`] over numeric vertex ids, used to exercise the
/// builder through the trait rather than the bundled [`barcode_core::Graph`].
#[derive(Clone, Debug)]
pub struct EdgeTable {
    vertices: Vec<u32>,
    edges: Vec<Edge<u32>>,
}

impl EdgeTable {
    #[must_use]
    pub fn new(vertex_count: u32, edges: &[(u32, u32, f64)]) -> Self {
        Self {
            vertices: (0..vertex_count).collect(),
            edges: edges
                .iter()
                .map(|&(left, right, weight)| Edge::new(left, right, weight))
                .collect(),
        }
    }
}

impl WeightedGraph for EdgeTable {
    type Vertex = u32;

    fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge<u32>] {
        &self.edges
    }
}
