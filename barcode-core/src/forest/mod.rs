//! Minimum spanning forest construction with 0-dimensional barcodes.
//!
//! A Kruskal sweep visits edges by ascending weight and merges the
//! components of their endpoints through a [`DisjointSet`]. Each edge that
//! merges two components lands in the forest and closes the interval of its
//! first endpoint at `1 / weight`, so heavier edges (stronger similarity)
//! produce earlier deaths. Vertices that never merge keep an unbounded
//! interval.
//!
//! [`DisjointSet`]: crate::DisjointSet

mod builder;

use crate::{
    Result,
    barcode::Barcodes,
    graph::{Edge, WeightedGraph},
};

pub use self::builder::{DeathPolicy, ForestBuilder, PARALLEL_SORT_THRESHOLD, SortStrategy};

/// An edge accepted into the spanning forest.
#[derive(Clone, Debug, PartialEq)]
pub struct ForestEdge<V> {
    left: V,
    right: V,
    weight: f64,
    sequence: usize,
}

impl<V: Clone> ForestEdge<V> {
    fn from_edge(edge: &Edge<V>, sequence: usize) -> Self {
        Self {
            left: edge.left().clone(),
            right: edge.right().clone(),
            weight: edge.weight(),
            sequence,
        }
    }
}

impl<V> ForestEdge<V> {
    /// Returns the first endpoint as supplied in the input edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> &V { &self.left }

    /// Returns the second endpoint as supplied in the input edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> &V { &self.right }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns the position of the edge in the input edge list.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> usize { self.sequence }
}

/// The output of a forest sweep.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug)]
pub struct SpanningForest<V> {
    edges: Vec<ForestEdge<V>>,
    barcodes: Barcodes<V>,
    component_count: usize,
}

impl<V> SpanningForest<V> {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[ForestEdge<V>] { &self.edges }

    /// Returns the interval of every vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn barcodes(&self) -> &Barcodes<V> { &self.barcodes }

    /// Returns the number of connected components after the sweep.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(ForestEdge::weight).sum()
    }

    /// Splits the forest into its accepted edges and barcodes.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ForestEdge<V>>, Barcodes<V>) {
        (self.edges, self.barcodes)
    }
}

/// Runs the sweep with the default [`ForestBuilder`] configuration.
///
/// # Errors
/// See [`ForestBuilder::build`].
///
/// # Examples
/// ```
/// use barcode_core::{Graph, kruskal_with_barcodes};
///
/// let mut graph = Graph::new();
/// graph.add_vertex("x");
/// graph.add_vertex("y");
///
/// let forest = kruskal_with_barcodes(&graph)?;
/// assert!(forest.edges().is_empty());
/// assert_eq!(forest.barcodes().unbounded_count(), 2);
/// # Ok::<(), barcode_core::BarcodeError>(())
/// ```
pub fn kruskal_with_barcodes<G: WeightedGraph>(graph: &G) -> Result<SpanningForest<G::Vertex>> {
    ForestBuilder::new().build(graph)
}

#[cfg(test)]
mod property;
