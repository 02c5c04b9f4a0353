//! Pairwise Pearson correlation over numeric columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::profile::column_dtype;

/// Symmetric correlation matrix keyed by numeric column name.
///
/// Entries are in [-1, 1], or NaN when a pair has fewer than two
/// pairwise-complete observations or zero variance. The diagonal is 1.0
/// for columns with nonzero variance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationMatrix {
    entries: IndexMap<String, IndexMap<String, f64>>,
}

impl CorrelationMatrix {
    /// Get the coefficient for a pair of columns.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.entries.get(a).and_then(|row| row.get(b)).copied()
    }

    /// The numeric column names covered, in table order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Number of columns in the matrix.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix covers no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the Pearson correlation matrix over the table's numeric columns.
///
/// Each pair uses pairwise-complete observations: only rows where both
/// values are present and parseable. Fewer than two numeric columns yield
/// an empty matrix.
pub fn correlation_matrix(table: &DataTable) -> CorrelationMatrix {
    let numeric: Vec<(String, Vec<Option<f64>>)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(index, _)| column_dtype(table, *index).is_numeric())
        .map(|(index, name)| (name.clone(), numeric_values(table, index)))
        .collect();

    if numeric.len() < 2 {
        return CorrelationMatrix::default();
    }

    let mut entries: IndexMap<String, IndexMap<String, f64>> = numeric
        .iter()
        .map(|(name, _)| (name.clone(), IndexMap::new()))
        .collect();

    // Upper triangle plus mirror writes; each inner map still ends up in
    // table order because mirrors for row j arrive in increasing i.
    for i in 0..numeric.len() {
        for j in i..numeric.len() {
            let r = pairwise_pearson(&numeric[i].1, &numeric[j].1);
            entries[&numeric[i].0].insert(numeric[j].0.clone(), r);
            if i != j {
                entries[&numeric[j].0].insert(numeric[i].0.clone(), r);
            }
        }
    }

    CorrelationMatrix { entries }
}

/// Parse a column into per-row values; `None` marks missing or unparseable.
fn numeric_values(table: &DataTable, index: usize) -> Vec<Option<f64>> {
    table
        .column_values(index)
        .map(|v| {
            if DataTable::is_missing_value(v) {
                None
            } else {
                v.trim().parse::<f64>().ok()
            }
        })
        .collect()
}

/// Pearson coefficient over rows where both values are present.
///
/// NaN when fewer than two complete pairs exist or either side has zero
/// variance.
fn pairwise_pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| x.zip(*y))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        f64::NAN
    } else {
        (covariance / denominator).clamp(-1.0, 1.0)
    }
}
