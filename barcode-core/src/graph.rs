//! Weighted undirected graph model consumed by the forest builder.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

/// Identity requirements for graph vertices.
///
/// Any cloneable, hashable value works; labels from an edge list are the
/// common case.
pub trait VertexId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> VertexId for T {}

/// An undirected weighted edge.
///
/// Weights are not validated here; the forest builder rejects non-positive
/// and non-finite weights when it consumes the edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<V> {
    left: V,
    right: V,
    weight: f64,
}

impl<V> Edge<V> {
    /// Creates an edge between `left` and `right`.
    ///
    /// # Examples
    /// ```
    /// use barcode_core::Edge;
    ///
    /// let edge = Edge::new("a", "b", 2.5);
    /// assert_eq!(edge.endpoints(), (&"a", &"b"));
    /// assert_eq!(edge.weight(), 2.5);
    /// ```
    #[must_use]
    pub fn new(left: V, right: V, weight: f64) -> Self {
        Self {
            left,
            right,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> &V { &self.left }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> &V { &self.right }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns both endpoints in input order.
    #[must_use]
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.left, &self.right)
    }
}

/// A graph that exposes an enumerable vertex set and edge collection.
///
/// Implement this for your own storage to run the forest builder without
/// copying into [`Graph`].
pub trait WeightedGraph {
    /// Vertex identifier type.
    type Vertex: VertexId;

    /// Returns every vertex once.
    fn vertices(&self) -> &[Self::Vertex];

    /// Returns every edge, parallel edges included.
    fn edges(&self) -> &[Edge<Self::Vertex>];
}

/// In-memory weighted graph preserving vertex insertion order.
///
/// # Examples
/// ```
/// use barcode_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("Arya", "Sansa", 3.0);
/// graph.add_edge("Arya", "Jon", 1.0);
/// graph.add_vertex("Hodor");
///
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(&"Arya"), Some(2));
/// assert_eq!(graph.degree(&"Hodor"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    edges: Vec<Edge<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }
}

impl<V: VertexId> Graph<V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a vertex list and an edge list.
    ///
    /// Repeated vertices are kept once. Edges are stored verbatim, so an edge
    /// may reference a vertex missing from `vertices`; the forest builder
    /// reports such edges as unregistered.
    #[must_use]
    pub fn from_parts(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge<V>>,
    ) -> Self {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph.edges.extend(edges);
        graph
    }

    /// Adds `vertex` if it is unknown. Returns `true` when it was inserted.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        true
    }

    /// Appends an edge, adding either endpoint as a vertex on first sight.
    pub fn add_edge(&mut self, left: V, right: V, weight: f64) {
        self.add_vertex(left.clone());
        self.add_vertex(right.clone());
        self.edges.push(Edge::new(left, right, weight));
    }

    /// Returns `true` when `vertex` belongs to the vertex set.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the distinct neighbours of `vertex` in first-seen edge order.
    ///
    /// Returns `None` when `vertex` is not part of the graph.
    #[must_use]
    pub fn neighbours(&self, vertex: &V) -> Option<Vec<&V>> {
        self.contains(vertex).then(|| {
            let mut seen = HashSet::new();
            self.edges
                .iter()
                .filter_map(|edge| match edge.endpoints() {
                    (left, right) if left == vertex => Some(right),
                    (left, right) if right == vertex => Some(left),
                    _ => None,
                })
                .filter(|neighbour| seen.insert(*neighbour))
                .collect()
        })
    }

    /// Returns the number of distinct neighbours of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.neighbours(vertex).map(|neighbours| neighbours.len())
    }

    /// Computes the neighbour list of every vertex in one pass.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency<'_, V> {
        let mut lists: Vec<Vec<&V>> = vec![Vec::new(); self.vertices.len()];
        let mut seen = HashSet::new();
        for edge in &self.edges {
            let (Some(&left), Some(&right)) =
                (self.index.get(edge.left()), self.index.get(edge.right()))
            else {
                continue;
            };
            if seen.insert((left, right)) {
                if let Some(list) = lists.get_mut(left) {
                    list.push(edge.right());
                }
            }
            if left != right && seen.insert((right, left)) {
                if let Some(list) = lists.get_mut(right) {
                    list.push(edge.left());
                }
            }
        }
        Adjacency { graph: self, lists }
    }
}

impl<V: VertexId> WeightedGraph for Graph<V> {
    type Vertex = V;

    fn vertices(&self) -> &[V] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }
}

/// Neighbour lists for every vertex of a [`Graph`].
#[derive(Debug)]
pub struct Adjacency<'a, V> {
    graph: &'a Graph<V>,
    lists: Vec<Vec<&'a V>>,
}

impl<'a, V: VertexId> Adjacency<'a, V> {
    /// Returns the neighbours of `vertex`, or `None` for unknown vertices.
    #[must_use]
    pub fn neighbours(&self, vertex: &V) -> Option<&[&'a V]> {
        let index = *self.graph.index.get(vertex)?;
        self.lists.get(index).map(Vec::as_slice)
    }

    /// Returns the neighbour count of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.neighbours(vertex).map(|list| list.len())
    }
}
