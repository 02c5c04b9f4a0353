//! Dataset summarization.

use std::collections::HashSet;

use crate::input::DataTable;
use crate::summary::{ColumnSummary, DatasetSummary, NumericSummary};

use super::dtype::infer_kind;

/// Summarize every column of a table.
///
/// Pure function of the input; a zero-row or zero-column table produces a
/// valid summary with the corresponding dimensions and no statistics.
pub fn summarize_dataset(table: &DataTable) -> DatasetSummary {
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, name)| profile_column(table, index, name))
        .collect();

    DatasetSummary {
        n_rows: table.row_count(),
        n_cols: table.column_count(),
        columns,
    }
}

/// Build the summary record for a single column.
fn profile_column(table: &DataTable, index: usize, name: &str) -> ColumnSummary {
    let n_rows = table.row_count();

    let mut n_missing = 0usize;
    let mut distinct: HashSet<&str> = HashSet::new();
    let mut numbers: Vec<f64> = Vec::new();

    for value in table.column_values(index) {
        if DataTable::is_missing_value(value) {
            n_missing += 1;
            continue;
        }
        let trimmed = value.trim();
        distinct.insert(trimmed);
        if let Ok(number) = trimmed.parse::<f64>() {
            numbers.push(number);
        }
    }

    let dtype = infer_kind(table.column_values(index));
    let missing_share = if n_rows == 0 {
        0.0
    } else {
        n_missing as f64 / n_rows as f64
    };
    let numeric = if dtype.is_numeric() {
        numeric_summary(&numbers)
    } else {
        None
    };

    ColumnSummary {
        name: name.to_string(),
        dtype,
        n_missing,
        missing_share,
        n_distinct: distinct.len(),
        numeric,
    }
}

/// Min/max/mean/sample-std over the parseable values of a numeric column.
///
/// Returns `None` when no values remain, rather than zeroed statistics.
fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;

    for &value in values {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
        sum += value;
    }

    let mean = sum / n;
    let std = if values.len() < 2 {
        0.0
    } else {
        let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (squared_deviations / (n - 1.0)).sqrt()
    };

    Some(NumericSummary {
        min,
        max,
        mean,
        std,
    })
}
