//! Command implementations and argument parsing for the `barcode` binary.

use std::path::{Path, PathBuf};

use barcode_core::{BarcodeError, DeathPolicy, ForestBuilder, Graph, SpanningForest};
use barcode_providers_csv::{EdgeListColumns, EdgeListError, EdgeListProvider};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::render::{DEFAULT_CHART_WIDTH, OutputFormat, RenderOptions};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "barcode",
    about = "Build a minimum spanning forest and its 0-dimensional barcode."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Returns the rendering options requested on the command line.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        match &self.command {
            Command::Run(run) => RenderOptions {
                format: run.format,
                chart: run.chart,
                chart_width: run.chart_width,
            },
        }
    }
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the forest and barcodes for an edge list.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// What happens when a vertex dies more than once.
    #[arg(long, value_enum, default_value_t = DeathPolicyArg::Overwrite)]
    pub death_policy: DeathPolicyArg,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Append a text bar chart of the finite intervals.
    #[arg(long)]
    pub chart: bool,

    /// Width of the chart bars in characters.
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub chart_width: u16,

    /// Input source.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Death policies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeathPolicyArg {
    /// Every merge overwrites the death of its first endpoint.
    Overwrite,
    /// Only the first merge sets the death.
    FirstAssignment,
}

impl From<DeathPolicyArg> for DeathPolicy {
    fn from(value: DeathPolicyArg) -> Self {
        match value {
            DeathPolicyArg::Overwrite => Self::Overwrite,
            DeathPolicyArg::FirstAssignment => Self::FirstAssignment,
        }
    }
}

/// Input sources supported by `run`.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Read a CSV edge list with a header row.
    Csv(CsvArgs),
}

/// CSV ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct CsvArgs {
    /// Path to the CSV file.
    pub path: PathBuf,

    /// Column holding the first endpoint of each edge.
    #[arg(long, default_value = "Source")]
    pub source_column: String,

    /// Column holding the second endpoint of each edge.
    #[arg(long, default_value = "Target")]
    pub target_column: String,

    /// Column holding the edge weight.
    #[arg(long, default_value = "weight")]
    pub weight_column: String,

    /// Override name for the edge list (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The forest sweep rejected the graph.
    #[error(transparent)]
    Core(#[from] BarcodeError),
}

impl CliError {
    /// Returns the stable code of the underlying library error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EdgeList(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the edge list.
    pub data_source: String,
    /// Policy the sweep ran with.
    pub death_policy: DeathPolicy,
    /// The loaded graph, kept for degree annotations.
    pub graph: Graph<String>,
    /// The forest and barcodes.
    pub forest: SpanningForest<String>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or the sweep fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use barcode_cli::cli::{
/// #     Cli, Command, CsvArgs, DeathPolicyArg, OutputFormat, RunCommand, RunSource, run_cli,
/// # };
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "Source,Target,weight\nA,B,2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         death_policy: DeathPolicyArg::Overwrite,
///         format: OutputFormat::Human,
///         chart: false,
///         chart_width: 40,
///         source: RunSource::Csv(CsvArgs {
///             path: file.path().to_path_buf(),
///             source_column: "Source".into(),
///             target_column: "Target".into(),
///             weight_column: "weight".into(),
///             name: None,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.edges().len(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(death_policy = ?command.death_policy, source = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let death_policy = DeathPolicy::from(command.death_policy);
    let provider = match command.source {
        RunSource::Csv(args) => {
            Span::current().record("source", field::display("csv"));
            load_csv(args)?
        }
    };

    let forest = ForestBuilder::new()
        .with_death_policy(death_policy)
        .build(&provider)?;
    info!(
        data_source = provider.name(),
        forest_edges = forest.edges().len(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        death_policy,
        forest,
        graph: provider.into_graph(),
    })
}

#[instrument(
    name = "cli.load_csv",
    err,
    skip(args),
    fields(path = %args.path.display(), override_name = field::Empty),
)]
pub(super) fn load_csv(args: CsvArgs) -> Result<EdgeListProvider, CliError> {
    let CsvArgs {
        path,
        source_column,
        target_column,
        weight_column,
        name,
    } = args;
    Span::current().record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let columns = EdgeListColumns::default()
        .with_source(source_column)
        .with_target(target_column)
        .with_weight(weight_column);
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let provider = EdgeListProvider::try_from_csv_path(chosen_name, &path, &columns)?;
    info!(
        data_source = provider.name(),
        vertices = provider.graph().vertex_count(),
        edges = provider.graph().edge_count(),
        "edge list loaded"
    );
    Ok(provider)
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}
