//! Per-column missingness accounting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;

/// Missing-value count and share for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingnessEntry {
    /// Number of missing entries.
    pub missing_count: usize,
    /// `missing_count / n_rows`, 0.0 for a zero-row table.
    pub missing_share: f64,
}

/// Missingness report keyed by column name, in table column order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingnessTable {
    entries: IndexMap<String, MissingnessEntry>,
}

impl MissingnessTable {
    /// Get the entry for a column.
    pub fn get(&self, name: &str) -> Option<&MissingnessEntry> {
        self.entries.get(name)
    }

    /// Iterate entries in table column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MissingnessEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of columns reported.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report covers no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total missing entries across all columns.
    pub fn total_missing(&self) -> usize {
        self.entries.values().map(|e| e.missing_count).sum()
    }

    /// Mean missing share across columns, 0.0 when there are none.
    pub fn mean_missing_share(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.entries.values().map(|e| e.missing_share).sum();
        sum / self.entries.len() as f64
    }
}

/// Count missing values per column.
///
/// Derived directly from the table; requires no precomputed summary.
pub fn missing_table(table: &DataTable) -> MissingnessTable {
    let n_rows = table.row_count();

    let entries = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let missing_count = table
                .column_values(index)
                .filter(|v| DataTable::is_missing_value(v))
                .count();
            let missing_share = if n_rows == 0 {
                0.0
            } else {
                missing_count as f64 / n_rows as f64
            };
            (
                name.clone(),
                MissingnessEntry {
                    missing_count,
                    missing_share,
                },
            )
        })
        .collect();

    MissingnessTable { entries }
}
