//! Per-column summary record.

use serde::{Deserialize, Serialize};

use super::types::DtypeKind;

/// Descriptive statistics for a numeric column.
///
/// Computed over non-missing values only. `std` is the sample standard
/// deviation, and zero when fewer than two observations exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

/// Summary of a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name, unique within a [`DatasetSummary`](super::DatasetSummary).
    pub name: String,
    /// Inferred kind.
    pub dtype: DtypeKind,
    /// Number of missing entries.
    pub n_missing: usize,
    /// `n_missing / n_rows`, in [0, 1]; 0.0 for a zero-row table.
    pub missing_share: f64,
    /// Number of distinct non-missing values.
    pub n_distinct: usize,
    /// Numeric statistics; present only for numeric columns with at least
    /// one non-missing parseable value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

impl ColumnSummary {
    /// Whether the column carries at most one distinct non-missing value.
    pub fn is_constant(&self) -> bool {
        self.n_distinct <= 1
    }
}
