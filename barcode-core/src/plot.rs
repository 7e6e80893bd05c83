//! Row layout for drawing barcodes as horizontal bars.
//!
//! Unbounded intervals are left out. Each remaining interval gets its own
//! row, in vertex order, and rows are stacked [`ROW_SPACING`] apart starting
//! at `y = 0`. Rendering is left to the caller.

use crate::{barcode::Barcodes, graph::VertexId};

/// Rows per unit of vertical distance.
const ROWS_PER_UNIT: f64 = 10.0;

/// Vertical distance between consecutive rows.
pub const ROW_SPACING: f64 = 1.0 / ROWS_PER_UNIT;

/// One horizontal bar of a barcode chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSegment<V> {
    vertex: V,
    row: usize,
    y: f64,
    start: f64,
    end: f64,
}

impl<V> BarSegment<V> {
    /// Returns the vertex the bar belongs to.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex(&self) -> &V { &self.vertex }

    /// Returns the zero-based row index.
    #[must_use]
    #[rustfmt::skip]
    pub fn row(&self) -> usize { self.row }

    /// Returns the vertical position of the bar.
    #[must_use]
    #[rustfmt::skip]
    pub fn y(&self) -> f64 { self.y }

    /// Returns the left end of the bar (the birth).
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> f64 { self.start }

    /// Returns the right end of the bar (the death).
    #[must_use]
    #[rustfmt::skip]
    pub fn end(&self) -> f64 { self.end }
}

/// Bars for every finite interval of a [`Barcodes`] mapping.
///
/// # Examples
/// ```
/// use barcode_core::{BarcodePlot, Graph, kruskal_with_barcodes};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 2.0);
/// graph.add_vertex("lonely");
///
/// let forest = kruskal_with_barcodes(&graph)?;
/// let plot = BarcodePlot::from_barcodes(forest.barcodes());
/// assert_eq!(plot.len(), 1);
/// assert_eq!(plot.omitted(), 2);
/// assert_eq!(plot.max_death(), Some(0.5));
/// # Ok::<(), barcode_core::BarcodeError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BarcodePlot<V> {
    segments: Vec<BarSegment<V>>,
    omitted: usize,
}

impl<V: VertexId> BarcodePlot<V> {
    /// Lays out one bar per finite interval.
    #[must_use]
    pub fn from_barcodes(barcodes: &Barcodes<V>) -> Self {
        let segments: Vec<BarSegment<V>> = barcodes
            .finite()
            .enumerate()
            .map(|(row, (vertex, interval))| BarSegment {
                vertex: vertex.clone(),
                row,
                // Dividing keeps every row at the nearest double to `row / 10`.
                y: row as f64 / ROWS_PER_UNIT,
                start: interval.birth(),
                end: interval.death(),
            })
            .collect();
        let omitted = barcodes.len() - segments.len();
        Self { segments, omitted }
    }
}

impl<V> BarcodePlot<V> {
    /// Returns the bars in row order.
    #[must_use]
    #[rustfmt::skip]
    pub fn segments(&self) -> &[BarSegment<V>] { &self.segments }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when no interval was finite.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns how many unbounded intervals were left out.
    #[must_use]
    #[rustfmt::skip]
    pub fn omitted(&self) -> usize { self.omitted }

    /// Returns the largest bar end, or `None` when there are no bars.
    #[must_use]
    pub fn max_death(&self) -> Option<f64> {
        self.segments
            .iter()
            .map(BarSegment::end)
            .max_by(f64::total_cmp)
    }
}
