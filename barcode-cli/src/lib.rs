//! Support library for the `barcode` binary.
//!
//! Re-exports the CLI and logging modules so doctests and integration tests
//! can exercise the command pipeline without spawning a process.

pub mod cli;
pub mod logging;
