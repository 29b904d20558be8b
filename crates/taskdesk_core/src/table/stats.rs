//! Descriptive statistics over numeric columns.
//!
//! # Responsibility
//! - Compute mean, median and standard deviation per column.
//! - Render the per-column summary block shown on the console.
//!
//! # Invariants
//! - Standard deviation uses the sample formula (n - 1).
//! - Empty input yields zeroed figures rather than NaN.

use crate::table::reader::Dataset;
use serde::Serialize;
use std::fmt::Write as _;

/// Per-column aggregate figures, computed fresh on every load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnStats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Arithmetic average; 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value of the sorted sequence; the average of the two middle
/// values for even-length input, 0.0 for empty input.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Sample standard deviation (n - 1); 0.0 below two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let average = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - average).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Computes all three aggregate figures for one column.
pub fn compute_statistics(values: &[f64]) -> ColumnStats {
    ColumnStats {
        mean: mean(values),
        median: median(values),
        std_dev: sample_std_dev(values),
    }
}

/// Aggregates every dataset column in file order.
pub fn summarize(dataset: &Dataset) -> Vec<(String, ColumnStats)> {
    dataset
        .columns()
        .iter()
        .map(|column| (column.name.clone(), compute_statistics(&column.values)))
        .collect()
}

/// Formats the per-column summary block printed by the CLI.
pub fn render_summary(dataset: &Dataset) -> String {
    let mut out = String::new();
    for (name, stats) in summarize(dataset) {
        let _ = writeln!(out, "Column: {name}");
        let _ = writeln!(out, "  Mean: {:.4}", stats.mean);
        let _ = writeln!(out, "  Median: {:.4}", stats.median);
        let _ = writeln!(out, "  Std dev: {:.4}", stats.std_dev);
        let _ = writeln!(out, "{}", "-".repeat(30));
    }
    out
}
