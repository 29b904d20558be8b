//! Delimited-text reader with detection heuristics.
//!
//! # Responsibility
//! - Sniff the field delimiter and header presence from the first line.
//! - Parse cells under the decimal-comma convention.
//! - Produce an equal-length numeric dataset from raw rows.
//!
//! # Invariants
//! - A tie between `;` and `,` counts resolves to `;`.
//! - A column survives only when at least one cell parses numerically.
//! - Rows with a missing or unparseable cell in a surviving column are
//!   excluded whole; columns never go ragged.

use crate::table::{TableError, TableResult};
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::time::Instant;

// Dot-grouped thousands with a decimal comma, e.g. `1.234.567,89`.
static GROUPED_DECIMAL_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d{1,3}(\.\d{3})+(,\d+)?$").expect("valid grouped-number regex"));

/// Field separator accepted by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Semicolon,
    Comma,
}

impl Delimiter {
    /// Byte form consumed by the CSV decoder.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Semicolon => b';',
            Self::Comma => b',',
        }
    }

    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }
}

/// Failure to interpret a cell as a number under the decimal-comma rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberParseError {
    /// Offending cell text, trimmed.
    pub value: String,
}

impl Display for NumberParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell `{}` is not numeric", self.value)
    }
}

impl Error for NumberParseError {}

/// Named numeric column in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Equal-length named numeric columns in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Builds a dataset from pre-assembled columns.
    ///
    /// `load_dataset` guarantees equal column lengths; direct construction
    /// does not, which is why chart resolution re-checks series lengths.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Columns in file order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up one column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Number of rows shared by every column.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Picks the delimiter by counting `;` vs `,` in a first-line sample.
///
/// The more frequent separator wins; ties (including a sample with
/// neither) resolve to `;`, the stronger signal in the source data.
pub fn detect_delimiter(sample: &str) -> Delimiter {
    let semicolons = sample.matches(';').count();
    let commas = sample.matches(',').count();
    if commas > semicolons {
        Delimiter::Comma
    } else {
        Delimiter::Semicolon
    }
}

/// Decides whether a first row is a header.
///
/// A row is a header when at least one non-empty cell fails numeric
/// parsing; an all-numeric (or all-empty) row is data.
pub fn detect_header<S: AsRef<str>>(cells: &[S]) -> bool {
    cells.iter().any(|cell| {
        let cell = cell.as_ref().trim();
        !cell.is_empty() && parse_number(cell).is_err()
    })
}

/// Parses one cell under the decimal-comma convention.
///
/// Grouped forms like `1.234,56` drop the dots and swap the comma; any
/// other comma is taken as the decimal separator; dot-decimal cells pass
/// through unchanged.
pub fn parse_number(cell: &str) -> Result<f64, NumberParseError> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Err(NumberParseError {
            value: String::new(),
        });
    }

    let normalized = if GROUPED_DECIMAL_COMMA_RE.is_match(trimmed) {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.replace(',', ".")
    };

    normalized.parse::<f64>().map_err(|_| NumberParseError {
        value: trimmed.to_string(),
    })
}

/// Loads a delimited text file into named numeric columns.
///
/// # Side effects
/// - Emits `dataset_load` logging events with duration and status.
pub fn load_dataset(path: impl AsRef<Path>) -> TableResult<Dataset> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=dataset_load module=table status=start path={}",
        path.display()
    );

    match load_dataset_inner(path) {
        Ok(dataset) => {
            info!(
                "event=dataset_load module=table status=ok columns={} rows={} duration_ms={}",
                dataset.columns().len(),
                dataset.row_count(),
                started_at.elapsed().as_millis()
            );
            Ok(dataset)
        }
        Err(err) => {
            error!(
                "event=dataset_load module=table status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn load_dataset_inner(path: &Path) -> TableResult<Dataset> {
    let raw = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if raw.trim().is_empty() {
        return Err(TableError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let first_line = raw.lines().next().unwrap_or_default();
    let delimiter = detect_delimiter(first_line);

    let mut decoder = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut rows = Vec::new();
    for record in decoder.records() {
        rows.push(record?);
    }
    let Some(first_row) = rows.first() else {
        return Err(TableError::EmptyInput {
            path: path.to_path_buf(),
        });
    };

    let first_cells: Vec<&str> = first_row.iter().collect();
    let has_header = detect_header(&first_cells);
    let names: Vec<String> = if has_header {
        first_cells.iter().map(|cell| cell.trim().to_string()).collect()
    } else {
        (1..=first_cells.len()).map(|n| format!("Column_{n}")).collect()
    };
    let data_rows = if has_header { &rows[1..] } else { &rows[..] };

    build_dataset(&names, data_rows)
}

/// Applies the row policy: drop unnamed and non-numeric columns, then
/// exclude whole rows that fail parsing in any surviving column.
fn build_dataset(names: &[String], rows: &[csv::StringRecord]) -> TableResult<Dataset> {
    let mut candidates: Vec<(String, Vec<Option<f64>>)> = names
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(index, name)| {
            let cells = rows
                .iter()
                .map(|row| row.get(index).and_then(|cell| parse_number(cell).ok()))
                .collect();
            (name.clone(), cells)
        })
        .collect();

    candidates.retain(|(_, cells)| cells.iter().any(Option::is_some));
    if candidates.is_empty() {
        return Err(TableError::NoNumericColumns);
    }

    let keep_row: Vec<bool> = (0..rows.len())
        .map(|row| candidates.iter().all(|(_, cells)| cells[row].is_some()))
        .collect();

    let columns = candidates
        .into_iter()
        .map(|(name, cells)| Column {
            name,
            values: cells
                .into_iter()
                .zip(&keep_row)
                .filter_map(|(value, keep)| if *keep { value } else { None })
                .collect(),
        })
        .collect();

    Ok(Dataset::from_columns(columns))
}
