use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Failures raised while reading an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The input has no header row.
    #[error("edge list is empty: expected a header row")]
    EmptyInput,
    /// A configured column is missing from the header row.
    #[error("column `{column}` not found in header")]
    ColumnNotFound {
        /// Name of the missing column.
        column: String,
    },
    /// A data row has no value for a configured column.
    #[error("line {line} has no value for column `{column}`")]
    MissingField {
        /// One-based line number in the input.
        line: u64,
        /// Name of the empty column.
        column: String,
    },
    /// A weight cell does not parse as a number.
    #[error("line {line} has invalid weight `{value}`")]
    InvalidWeight {
        /// One-based line number in the input.
        line: u64,
        /// The raw cell contents.
        value: String,
    },
    /// The CSV reader rejected the input.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// The input file could not be opened.
    #[error("failed to open `{}`: {source}", path.display())]
    Io {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Stable codes describing [`EdgeListError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EdgeListErrorCode {
    /// The input has no header row.
    EmptyInput,
    /// A configured column is missing from the header row.
    ColumnNotFound,
    /// A data row has no value for a configured column.
    MissingField,
    /// A weight cell does not parse as a number.
    InvalidWeight,
    /// The CSV reader rejected the input.
    Csv,
    /// The input file could not be opened.
    Io,
}

impl EdgeListErrorCode {
    /// Returns the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "EDGE_LIST_EMPTY_INPUT",
            Self::ColumnNotFound => "EDGE_LIST_COLUMN_NOT_FOUND",
            Self::MissingField => "EDGE_LIST_MISSING_FIELD",
            Self::InvalidWeight => "EDGE_LIST_INVALID_WEIGHT",
            Self::Csv => "EDGE_LIST_CSV",
            Self::Io => "EDGE_LIST_IO",
        }
    }
}

impl fmt::Display for EdgeListErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EdgeListError {
    /// Retrieves the stable [`EdgeListErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::EmptyInput => EdgeListErrorCode::EmptyInput,
            Self::ColumnNotFound { .. } => EdgeListErrorCode::ColumnNotFound,
            Self::MissingField { .. } => EdgeListErrorCode::MissingField,
            Self::InvalidWeight { .. } => EdgeListErrorCode::InvalidWeight,
            Self::Csv(_) => EdgeListErrorCode::Csv,
            Self::Io { .. } => EdgeListErrorCode::Io,
        }
    }
}
