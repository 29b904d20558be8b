//! Delimited-text ingestion and descriptive statistics.
//!
//! # Responsibility
//! - Turn a delimited text file into named, equal-length numeric columns.
//! - Compute per-column aggregates and chart series for presenter display.
//!
//! # Invariants
//! - Every dataset column has the same number of values.
//! - Detection heuristics are pure functions with pinned tie-breaks.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod chart;
pub mod reader;
pub mod stats;

pub type TableResult<T> = Result<T, TableError>;

/// Load-level error for dataset ingestion.
#[derive(Debug)]
pub enum TableError {
    /// Reading the input file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Row decoding failed below the first line.
    Decode(csv::Error),
    /// The file holds no usable cells.
    EmptyInput { path: PathBuf },
    /// No column had a single parseable numeric value.
    NoNumericColumns,
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "{err}"),
            Self::EmptyInput { path } => {
                write!(f, "`{}` holds no usable rows", path.display())
            }
            Self::NoNumericColumns => write!(f, "no numeric columns found in the input"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
            Self::EmptyInput { .. } => None,
            Self::NoNumericColumns => None,
        }
    }
}

impl From<csv::Error> for TableError {
    fn from(value: csv::Error) -> Self {
        Self::Decode(value)
    }
}
