//! Configuration and execution of the Kruskal barcode sweep.

use tracing::{debug, instrument, trace};

use crate::{
    Result,
    barcode::{Barcodes, Interval},
    disjoint_set::DisjointSet,
    error::{BarcodeError, label},
    graph::{Edge, VertexId, WeightedGraph},
};

use super::{ForestEdge, SpanningForest};

/// Edge count from which [`SortStrategy::Auto`] sorts on the rayon pool.
pub const PARALLEL_SORT_THRESHOLD: usize = 16_384;

/// Decides what happens to a vertex interval when the vertex joins another
/// component more than once as the first endpoint of an accepted edge.
///
/// # Examples
/// ```
/// use barcode_core::DeathPolicy;
///
/// assert_eq!(DeathPolicy::default(), DeathPolicy::Overwrite);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DeathPolicy {
    /// Every accepted edge overwrites the death of its first endpoint.
    #[default]
    Overwrite,
    /// Only the first accepted edge sets the death; later ones leave it.
    FirstAssignment,
}

impl DeathPolicy {
    fn assigns(self, current: &Interval) -> bool {
        match self {
            Self::Overwrite => true,
            Self::FirstAssignment => current.is_unbounded(),
        }
    }
}

/// Selects how edges are ordered before the sweep.
///
/// Every strategy performs a stable sort by ascending weight, so edges with
/// equal weights keep their input order and the result is identical across
/// strategies.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SortStrategy {
    /// Sort in parallel for large inputs when the `parallel` feature is on.
    #[default]
    Auto,
    /// Always sort on the calling thread.
    Sequential,
    /// Always sort on the rayon pool. Requires the `parallel` feature.
    Parallel,
}

/// Configures and runs the Kruskal sweep that produces a spanning forest and
/// per-vertex barcodes.
///
/// # Examples
/// ```
/// use barcode_core::{DeathPolicy, ForestBuilder, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 1.0);
/// graph.add_edge("b", "c", 2.0);
/// graph.add_edge("a", "c", 0.5);
///
/// let forest = ForestBuilder::new().build(&graph)?;
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.barcodes().get(&"a").map(|i| i.death()), Some(1.0));
///
/// let forest = ForestBuilder::new()
///     .with_death_policy(DeathPolicy::FirstAssignment)
///     .build(&graph)?;
/// assert_eq!(forest.barcodes().get(&"a").map(|i| i.death()), Some(2.0));
/// # Ok::<(), barcode_core::BarcodeError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForestBuilder {
    death_policy: DeathPolicy,
    sort_strategy: SortStrategy,
}

impl ForestBuilder {
    /// Creates a builder with the default policy and sort strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the death assignment policy.
    #[must_use]
    pub fn with_death_policy(mut self, policy: DeathPolicy) -> Self {
        self.death_policy = policy;
        self
    }

    /// Returns the configured death assignment policy.
    #[must_use]
    pub fn death_policy(&self) -> DeathPolicy {
        self.death_policy
    }

    /// Overrides the edge sort strategy.
    #[must_use]
    pub fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    /// Returns the configured edge sort strategy.
    #[must_use]
    pub fn sort_strategy(&self) -> SortStrategy {
        self.sort_strategy
    }

    /// Runs the sweep over `graph`.
    ///
    /// Edges are visited by ascending weight (ties in input order). An edge
    /// joining two components is accepted, its first endpoint's interval
    /// dies at `1 / weight` (subject to the [`DeathPolicy`]), and the
    /// components merge. Edges inside one component are skipped.
    ///
    /// # Errors
    /// Returns [`BarcodeError::UnregisteredVertex`] when an edge endpoint is
    /// not a graph vertex, [`BarcodeError::NonFiniteWeight`] or
    /// [`BarcodeError::NonPositiveWeight`] for invalid weights,
    /// [`BarcodeError::DeathOverflow`] for weights so small that their reciprocal
    /// is not finite, and
    /// [`BarcodeError::StrategyUnavailable`] when a parallel sort is requested
    /// without the `parallel` feature. Validation happens before any merge.
    #[instrument(
        name = "core.build_forest",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertices().len(),
            edges = graph.edges().len(),
            policy = ?self.death_policy,
            strategy = ?self.sort_strategy,
        ),
    )]
    pub fn build<G: WeightedGraph>(&self, graph: &G) -> Result<SpanningForest<G::Vertex>> {
        let vertices = graph.vertices();
        let edges = graph.edges();

        let mut components = DisjointSet::with_capacity(vertices.len());
        for vertex in vertices {
            components.register(vertex.clone());
        }
        validate_edges(edges, &components)?;

        let order = self.sorted_order(edges)?;
        let mut barcodes = Barcodes::unbounded_for(vertices);
        let mut accepted = Vec::with_capacity(components.len().saturating_sub(1));
        let mut skipped = 0_usize;

        for sequence in order {
            let Some(edge) = edges.get(sequence) else {
                continue;
            };
            if !components.union(edge.left(), edge.right())? {
                skipped = skipped.saturating_add(1);
                continue;
            }

            let death = edge.weight().recip();
            if let Some(interval) = barcodes.get_mut(edge.left()) {
                if self.death_policy.assigns(interval) {
                    *interval = Interval::dying_at(death);
                }
            }
            trace!(
                left = ?edge.left(),
                right = ?edge.right(),
                weight = edge.weight(),
                death,
                "edge accepted into forest"
            );
            accepted.push(ForestEdge::from_edge(edge, sequence));
        }

        record_sweep(accepted.len(), skipped);
        debug!(
            accepted = accepted.len(),
            skipped,
            components = components.component_count(),
            unbounded = barcodes.unbounded_count(),
            "forest sweep completed"
        );

        Ok(SpanningForest {
            edges: accepted,
            barcodes,
            component_count: components.component_count(),
        })
    }

    fn sorted_order<V>(&self, edges: &[Edge<V>]) -> Result<Vec<usize>> {
        let mut keyed: Vec<(f64, usize)> = edges
            .iter()
            .enumerate()
            .map(|(sequence, edge)| (edge.weight(), sequence))
            .collect();
        let by_weight = |left: &(f64, usize), right: &(f64, usize)| left.0.total_cmp(&right.0);

        match self.sort_strategy {
            SortStrategy::Sequential => keyed.sort_by(by_weight),
            SortStrategy::Auto if keyed.len() < PARALLEL_SORT_THRESHOLD => {
                keyed.sort_by(by_weight);
            }
            #[cfg(feature = "parallel")]
            SortStrategy::Auto | SortStrategy::Parallel => {
                use rayon::slice::ParallelSliceMut;
                keyed.par_sort_by(by_weight);
            }
            #[cfg(not(feature = "parallel"))]
            SortStrategy::Auto => keyed.sort_by(by_weight),
            #[cfg(not(feature = "parallel"))]
            SortStrategy::Parallel => {
                return Err(BarcodeError::StrategyUnavailable {
                    requested: SortStrategy::Parallel,
                });
            }
        }
        Ok(keyed.into_iter().map(|(_, sequence)| sequence).collect())
    }
}

fn validate_edges<V: VertexId>(edges: &[Edge<V>], components: &DisjointSet<V>) -> Result<()> {
    for edge in edges {
        for endpoint in [edge.left(), edge.right()] {
            if !components.contains(endpoint) {
                return Err(BarcodeError::unregistered(endpoint));
            }
        }

        let weight = edge.weight();
        if !weight.is_finite() {
            return Err(BarcodeError::NonFiniteWeight {
                left: label(edge.left()),
                right: label(edge.right()),
            });
        }
        if weight <= 0.0 {
            return Err(BarcodeError::NonPositiveWeight {
                left: label(edge.left()),
                right: label(edge.right()),
                weight,
            });
        }
        if weight.recip().is_infinite() {
            return Err(BarcodeError::DeathOverflow {
                left: label(edge.left()),
                right: label(edge.right()),
                weight,
            });
        }
    }
    Ok(())
}

#[cfg(feature = "metrics")]
fn record_sweep(accepted: usize, skipped: usize) {
    metrics::counter!("forest_edges_accepted").increment(accepted as u64);
    metrics::counter!("forest_edges_skipped").increment(skipped as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_sweep(_accepted: usize, _skipped: usize) {}
