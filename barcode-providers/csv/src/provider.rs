//! CSV edge-list ingestion.
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use barcode_core::{Edge, Graph, WeightedGraph};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::errors::EdgeListError;

/// Header names of the three columns an edge list is read from.
///
/// Defaults to `Source`, `Target`, and `weight`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeListColumns {
    source: String,
    target: String,
    weight: String,
}

impl Default for EdgeListColumns {
    fn default() -> Self {
        Self {
            source: "Source".to_owned(),
            target: "Target".to_owned(),
            weight: "weight".to_owned(),
        }
    }
}

impl EdgeListColumns {
    /// Overrides the source column name.
    #[must_use]
    pub fn with_source(mut self, column: impl Into<String>) -> Self {
        self.source = column.into();
        self
    }

    /// Overrides the target column name.
    #[must_use]
    pub fn with_target(mut self, column: impl Into<String>) -> Self {
        self.target = column.into();
        self
    }

    /// Overrides the weight column name.
    #[must_use]
    pub fn with_weight(mut self, column: impl Into<String>) -> Self {
        self.weight = column.into();
        self
    }

    /// Returns the source column name.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the target column name.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the weight column name.
    #[must_use]
    pub fn weight(&self) -> &str {
        &self.weight
    }
}

/// Column positions resolved against a header row.
struct ColumnIndices {
    source: usize,
    target: usize,
    weight: usize,
}

/// Weighted graph read from a CSV edge list.
///
/// Every row becomes one edge, in file order. Endpoints become vertices the
/// first time they appear.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    graph: Graph<String>,
}

impl EdgeListProvider {
    /// Reads an edge list from any reader.
    ///
    /// # Examples
    /// ```
    /// use barcode_providers_csv::{EdgeListColumns, EdgeListProvider};
    ///
    /// let csv = "Source,Target,weight\nA,B,1.0\nB,C,2.5\n";
    /// let provider =
    ///     EdgeListProvider::try_from_reader("demo", csv.as_bytes(), &EdgeListColumns::default())?;
    /// assert_eq!(provider.name(), "demo");
    /// assert_eq!(provider.graph().vertex_count(), 3);
    /// assert_eq!(provider.graph().edge_count(), 2);
    /// # Ok::<(), barcode_providers_csv::EdgeListError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`EdgeListError::EmptyInput`] when there is no header row,
    /// [`EdgeListError::ColumnNotFound`] when a configured column is absent,
    /// [`EdgeListError::MissingField`] or [`EdgeListError::InvalidWeight`] for
    /// malformed rows, and [`EdgeListError::Csv`] for reader failures.
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
        columns: &EdgeListColumns,
    ) -> Result<Self, EdgeListError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(EdgeListError::EmptyInput);
        }
        let indices = resolve_columns(&headers, columns)?;

        let mut graph = Graph::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            let source = field(&record, indices.source, line, columns.source())?;
            let target = field(&record, indices.target, line, columns.target())?;
            let raw_weight = field(&record, indices.weight, line, columns.weight())?;
            let weight = raw_weight
                .parse::<f64>()
                .map_err(|_| EdgeListError::InvalidWeight {
                    line,
                    value: raw_weight.to_owned(),
                })?;
            graph.add_edge(source.to_owned(), target.to_owned(), weight);
        }

        Ok(Self {
            name: name.into(),
            graph,
        })
    }

    /// Reads an edge list from a file.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened, and the
    /// errors of [`Self::try_from_reader`] otherwise.
    pub fn try_from_csv_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        columns: &EdgeListColumns,
    ) -> Result<Self, EdgeListError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EdgeListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::try_from_reader(name, BufReader::new(file), columns)
    }

    /// Returns the human-readable name of the edge list.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Consumes the provider and returns the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> Graph<String> {
        self.graph
    }
}

impl WeightedGraph for EdgeListProvider {
    type Vertex = String;

    fn vertices(&self) -> &[String] {
        self.graph.vertices()
    }

    fn edges(&self) -> &[Edge<String>] {
        self.graph.edges()
    }
}

fn resolve_columns(
    headers: &StringRecord,
    columns: &EdgeListColumns,
) -> Result<ColumnIndices, EdgeListError> {
    let position = |column: &str| {
        headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| EdgeListError::ColumnNotFound {
                column: column.to_owned(),
            })
    };
    Ok(ColumnIndices {
        source: position(columns.source())?,
        target: position(columns.target())?,
        weight: position(columns.weight())?,
    })
}

fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    line: u64,
    column: &str,
) -> Result<&'r str, EdgeListError> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(EdgeListError::MissingField {
            line,
            column: column.to_owned(),
        }),
    }
}
