//! Dataset-level summary aggregate.

use serde::{Deserialize, Serialize};

use super::column::ColumnSummary;

/// Summary of an entire dataset.
///
/// A fresh value object per profiling call; immutable afterward and never
/// persisted by the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of data rows at the time of the call.
    pub n_rows: usize,
    /// Number of columns at the time of the call.
    pub n_cols: usize,
    /// One summary per column, in table column order.
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Get a column summary by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names, in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Total missing entries across all columns.
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|c| c.n_missing).sum()
    }
}
