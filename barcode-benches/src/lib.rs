//! Benchmark support crate for the barcode workspace.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for the forest sweep and the disjoint set.

pub mod error;
pub mod params;
pub mod source;
