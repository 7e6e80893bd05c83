//! Barcode core library.
//!
//! Builds a minimum spanning forest over a weighted graph with Kruskal's
//! algorithm and records, for every vertex, the 0-dimensional persistence
//! interval `(0, 1 / weight)` of the merge that closed it.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod barcode;
mod disjoint_set;
mod error;
mod forest;
mod graph;
mod plot;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    barcode::{Barcodes, Interval},
    disjoint_set::{DisjointSet, SharedDisjointSet},
    error::{BarcodeError, BarcodeErrorCode, Result},
    forest::{
        DeathPolicy, ForestBuilder, ForestEdge, PARALLEL_SORT_THRESHOLD, SortStrategy,
        SpanningForest, kruskal_with_barcodes,
    },
    graph::{Adjacency, Edge, Graph, VertexId, WeightedGraph},
    plot::{BarSegment, BarcodePlot, ROW_SPACING},
};
