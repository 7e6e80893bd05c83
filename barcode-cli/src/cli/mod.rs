//! Command-line interface for the barcode pipeline.
//!
//! The `run` command loads a CSV edge list, builds the spanning forest with
//! per-vertex barcodes, and renders the result as text, CSV, or a bar chart.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, CsvArgs, DeathPolicyArg, ExecutionSummary, RunCommand, RunSource,
    run_cli,
};
pub use render::{DEFAULT_CHART_WIDTH, OutputFormat, RenderOptions, render_summary};
