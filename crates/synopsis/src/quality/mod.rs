//! Heuristic data-quality flags derived from a dataset summary.

use serde::{Deserialize, Serialize};

use crate::analysis::MissingnessTable;
use crate::summary::DatasetSummary;

/// Default distinct-value cutoff above which a categorical column is
/// considered high-cardinality.
pub const DEFAULT_HIGH_CARDINALITY_THRESHOLD: usize = 100;

/// Thresholds and penalty weights for quality-flag computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// A categorical column with strictly more distinct values than this
    /// is flagged as high-cardinality.
    pub high_cardinality_threshold: usize,
    /// Score penalty applied when any constant column exists.
    pub constant_penalty: f64,
    /// Score penalty applied when any high-cardinality categorical exists.
    pub high_cardinality_penalty: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            high_cardinality_threshold: DEFAULT_HIGH_CARDINALITY_THRESHOLD,
            constant_penalty: 0.1,
            high_cardinality_penalty: 0.1,
        }
    }
}

/// Derived quality flags for a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityFlags {
    /// Composite score in [0, 1]; 1.0 for a fully present, issue-free table.
    pub quality_score: f64,
    /// Whether any column has at most one distinct non-missing value.
    pub has_constant_columns: bool,
    /// Names of constant columns, in table column order.
    pub constant_columns: Vec<String>,
    /// Whether any categorical column exceeds the cardinality threshold.
    pub has_high_cardinality_categoricals: bool,
    /// `(name, distinct_count)` for each such column, in table column order.
    pub high_cardinality_columns: Vec<(String, usize)>,
}

/// Derive quality flags from a summary and its missingness table.
///
/// `ColumnSummary` always carries `n_distinct`, so no raw-table access is
/// needed here; both inputs must come from the same table.
pub fn compute_quality_flags(
    summary: &DatasetSummary,
    missingness: &MissingnessTable,
    config: &QualityConfig,
) -> QualityFlags {
    // A zero-row table has no constant columns: there is no value to be
    // constant at. All-missing columns in a populated table do count.
    let constant_columns: Vec<String> = if summary.n_rows == 0 {
        Vec::new()
    } else {
        summary
            .columns
            .iter()
            .filter(|c| c.is_constant())
            .map(|c| c.name.clone())
            .collect()
    };

    let high_cardinality_columns: Vec<(String, usize)> = summary
        .columns
        .iter()
        .filter(|c| c.dtype.is_categorical() && c.n_distinct > config.high_cardinality_threshold)
        .map(|c| (c.name.clone(), c.n_distinct))
        .collect();

    let has_constant_columns = !constant_columns.is_empty();
    let has_high_cardinality_categoricals = !high_cardinality_columns.is_empty();

    let mut quality_score = 1.0 - missingness.mean_missing_share();
    if has_constant_columns {
        quality_score -= config.constant_penalty;
    }
    if has_high_cardinality_categoricals {
        quality_score -= config.high_cardinality_penalty;
    }
    let quality_score = quality_score.clamp(0.0, 1.0);

    QualityFlags {
        quality_score,
        has_constant_columns,
        constant_columns,
        has_high_cardinality_categoricals,
        high_cardinality_columns,
    }
}
