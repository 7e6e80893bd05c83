//! Property-based tests for the forest sweep.
//!
//! Compares the builder against a plain sequential oracle, checks the
//! structural invariants of the forest and its barcodes, and confirms that
//! every sort strategy yields the same result.

mod oracle;
mod strategies;
mod structural;
mod types;
