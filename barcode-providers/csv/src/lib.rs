//! Edge-list provider that loads a weighted graph from CSV.

mod errors;
mod provider;

pub use errors::{EdgeListError, EdgeListErrorCode};
pub use provider::{EdgeListColumns, EdgeListProvider};

#[cfg(test)]
mod tests;
