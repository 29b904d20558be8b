//! Chart-request contract handed to the presenter collaborator.
//!
//! # Responsibility
//! - Describe which visualization the presenter should draw.
//! - Resolve a request against a dataset into ready-to-plot series.
//!
//! # Invariants
//! - Resolution validates column existence before returning data.
//! - Scatter series must have equal length.

use crate::table::reader::Dataset;
use crate::table::stats::mean;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ChartResult<T> = Result<T, ChartError>;

/// Resolution failure for a chart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Request names a column the dataset does not have.
    UnknownColumn(String),
    /// Scatter axes differ in length (possible only on hand-built datasets).
    SeriesLengthMismatch {
        x: String,
        y: String,
        x_len: usize,
        y_len: usize,
    },
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownColumn(name) => write!(f, "column not found: `{name}`"),
            Self::SeriesLengthMismatch { x, y, x_len, y_len } => write!(
                f,
                "columns `{x}` and `{y}` differ in length ({x_len} vs {y_len})"
            ),
        }
    }
}

impl Error for ChartError {}

/// Requested visualization, chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "chart")]
pub enum ChartRequest {
    /// Scatter of two columns, one point per row.
    Scatter { x: String, y: String },
    /// One bar per column, heights are the column means.
    ColumnMeans,
    /// One bar per raw value of a single column.
    ColumnValues { column: String },
}

/// Ready-to-plot series for the presenter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "chart")]
pub enum ChartData {
    Scatter {
        x_label: String,
        y_label: String,
        points: Vec<(f64, f64)>,
    },
    Bars {
        labels: Vec<String>,
        values: Vec<f64>,
    },
}

impl ChartRequest {
    /// Resolves this request against a loaded dataset.
    pub fn resolve(&self, dataset: &Dataset) -> ChartResult<ChartData> {
        match self {
            Self::Scatter { x, y } => {
                let x_column = dataset
                    .column(x)
                    .ok_or_else(|| ChartError::UnknownColumn(x.clone()))?;
                let y_column = dataset
                    .column(y)
                    .ok_or_else(|| ChartError::UnknownColumn(y.clone()))?;
                if x_column.values.len() != y_column.values.len() {
                    return Err(ChartError::SeriesLengthMismatch {
                        x: x.clone(),
                        y: y.clone(),
                        x_len: x_column.values.len(),
                        y_len: y_column.values.len(),
                    });
                }
                Ok(ChartData::Scatter {
                    x_label: x.clone(),
                    y_label: y.clone(),
                    points: x_column
                        .values
                        .iter()
                        .copied()
                        .zip(y_column.values.iter().copied())
                        .collect(),
                })
            }
            Self::ColumnMeans => Ok(ChartData::Bars {
                labels: dataset
                    .columns()
                    .iter()
                    .map(|column| column.name.clone())
                    .collect(),
                values: dataset
                    .columns()
                    .iter()
                    .map(|column| mean(&column.values))
                    .collect(),
            }),
            Self::ColumnValues { column } => {
                let found = dataset
                    .column(column)
                    .ok_or_else(|| ChartError::UnknownColumn(column.clone()))?;
                Ok(ChartData::Bars {
                    labels: (0..found.values.len()).map(|row| row.to_string()).collect(),
                    values: found.values.clone(),
                })
            }
        }
    }
}
