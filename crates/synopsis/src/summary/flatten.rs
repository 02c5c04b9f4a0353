//! Flattening a summary into one displayable row per column.

use serde::{Deserialize, Serialize};

use super::column::ColumnSummary;
use super::dataset::DatasetSummary;
use super::types::DtypeKind;

/// One flat, display-ready row of a dataset summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub name: String,
    pub dtype: DtypeKind,
    pub n_missing: usize,
    pub missing_share: f64,
    pub n_distinct: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
}

impl From<&ColumnSummary> for SummaryRow {
    fn from(col: &ColumnSummary) -> Self {
        Self {
            name: col.name.clone(),
            dtype: col.dtype,
            n_missing: col.n_missing,
            missing_share: col.missing_share,
            n_distinct: col.n_distinct,
            min: col.numeric.as_ref().map(|n| n.min),
            max: col.numeric.as_ref().map(|n| n.max),
            mean: col.numeric.as_ref().map(|n| n.mean),
            std: col.numeric.as_ref().map(|n| n.std),
        }
    }
}

/// Flatten a [`DatasetSummary`] into one row per column, in table order.
///
/// Pure reshaping of already-computed fields; no statistics are recomputed.
pub fn flatten_summary(summary: &DatasetSummary) -> Vec<SummaryRow> {
    summary.columns.iter().map(SummaryRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::NumericSummary;

    #[test]
    fn test_flatten_carries_fields_through() {
        let summary = DatasetSummary {
            n_rows: 3,
            n_cols: 2,
            columns: vec![
                ColumnSummary {
                    name: "age".to_string(),
                    dtype: DtypeKind::Numeric,
                    n_missing: 1,
                    missing_share: 1.0 / 3.0,
                    n_distinct: 2,
                    numeric: Some(NumericSummary {
                        min: 10.0,
                        max: 20.0,
                        mean: 15.0,
                        std: 7.0710678118654755,
                    }),
                },
                ColumnSummary {
                    name: "city".to_string(),
                    dtype: DtypeKind::Categorical,
                    n_missing: 0,
                    missing_share: 0.0,
                    n_distinct: 3,
                    numeric: None,
                },
            ],
        };

        let rows = flatten_summary(&summary);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "age");
        assert_eq!(rows[0].mean, Some(15.0));
        assert_eq!(rows[1].name, "city");
        assert_eq!(rows[1].min, None);
        assert!((rows[0].missing_share - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_flatten_empty_summary() {
        let summary = DatasetSummary {
            n_rows: 0,
            n_cols: 0,
            columns: vec![],
        };
        assert!(flatten_summary(&summary).is_empty());
    }
}
