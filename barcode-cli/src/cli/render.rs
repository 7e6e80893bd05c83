//! Rendering of command results.

use std::io::{self, Write};

use barcode_core::{BarcodePlot, Interval};
use clap::ValueEnum;

use super::commands::ExecutionSummary;

/// Default number of character cells available to the longest chart bar.
pub const DEFAULT_CHART_WIDTH: u16 = 40;

/// Output formats for `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary, forest edges, and intervals as tab-separated text.
    #[default]
    Human,
    /// Intervals only, as `vertex,birth,death` CSV.
    Csv,
}

/// Controls how [`render_summary`] lays out a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Append a text bar chart after the main output.
    pub chart: bool,
    /// Character cells available to the longest bar.
    pub chart_width: u16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            chart: false,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

/// Renders `summary` to `writer`.
///
/// Unbounded deaths are written as `inf`.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use barcode_cli::cli::{ExecutionSummary, OutputFormat, RenderOptions, render_summary};
/// # use barcode_core::{DeathPolicy, Graph, kruskal_with_barcodes};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::new();
/// graph.add_edge("A".to_owned(), "B".to_owned(), 2.0);
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     death_policy: DeathPolicy::Overwrite,
///     forest: kruskal_with_barcodes(&graph)?,
///     graph,
/// };
/// let options = RenderOptions {
///     format: OutputFormat::Csv,
///     ..RenderOptions::default()
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &options, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "vertex,birth,death\nA,0,0.5\nB,0,inf\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    summary: &ExecutionSummary,
    options: &RenderOptions,
    mut writer: impl Write,
) -> io::Result<()> {
    match options.format {
        OutputFormat::Human => render_human(summary, &mut writer)?,
        OutputFormat::Csv => render_csv(summary, &mut writer)?,
    }
    if options.chart {
        render_chart(summary, options.chart_width, &mut writer)?;
    }
    Ok(())
}

fn render_human(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "death policy: {:?}", summary.death_policy)?;
    writeln!(writer, "vertices: {}", summary.graph.vertex_count())?;
    writeln!(writer, "edges: {}", summary.graph.edge_count())?;
    writeln!(writer, "forest edges: {}", forest.edges().len())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    writeln!(writer, "total weight: {}", forest.total_weight())?;

    writeln!(writer, "forest:")?;
    for edge in forest.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.left(), edge.right(), edge.weight())?;
    }

    let adjacency = summary.graph.adjacency();
    writeln!(writer, "intervals:")?;
    writeln!(writer, "vertex\tdegree\tbirth\tdeath")?;
    for (vertex, interval) in forest.barcodes().iter() {
        let degree = adjacency.degree(vertex).unwrap_or_default();
        writeln!(
            writer,
            "{vertex}\t{degree}\t{}\t{}",
            interval.birth(),
            interval.death()
        )?;
    }
    Ok(())
}

fn render_csv(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["vertex", "birth", "death"])?;
    for (vertex, interval) in summary.forest.barcodes().iter() {
        let birth = interval.birth().to_string();
        let death = interval.death().to_string();
        csv.write_record([vertex.as_str(), birth.as_str(), death.as_str()])?;
    }
    csv.flush()
}

fn render_chart(summary: &ExecutionSummary, width: u16, writer: &mut impl Write) -> io::Result<()> {
    let plot = BarcodePlot::from_barcodes(summary.forest.barcodes());
    writeln!(
        writer,
        "barcode chart: {} finite, {} unbounded omitted",
        plot.len(),
        plot.omitted()
    )?;
    let Some(max_death) = plot.max_death() else {
        return Ok(());
    };
    let label_width = plot
        .segments()
        .iter()
        .map(|bar| bar.vertex().chars().count())
        .max()
        .unwrap_or_default();
    for bar in plot.segments() {
        writeln!(
            writer,
            "{y:>5.1} {vertex:<label_width$} |{cells}| {end}",
            y = bar.y(),
            vertex = bar.vertex(),
            cells = bar_cells(bar.start(), bar.end(), max_death, width),
            end = bar.end(),
        )?;
    }
    writeln!(
        writer,
        "{:>5} {:<label_width$}  {}{:>width$}",
        "",
        "",
        Interval::BIRTH,
        max_death,
        width = usize::from(width).saturating_sub(1),
    )
}

/// Draws a bar covering `[start, end]` on a `width`-cell axis scaled to
/// `[0, max]`. A cell is filled when its midpoint lies inside the bar.
pub(super) fn bar_cells(start: f64, end: f64, max: f64, width: u16) -> String {
    let scale = f64::from(width) / max;
    (0..width)
        .map(|cell| {
            let midpoint = f64::from(cell) + 0.5;
            if midpoint >= start * scale && midpoint <= end * scale {
                '#'
            } else {
                ' '
            }
        })
        .collect()
}
