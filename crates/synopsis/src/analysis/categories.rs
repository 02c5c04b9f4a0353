//! Top-K frequency breakdowns for categorical columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::profile::column_dtype;

/// One category value with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Top-category tables keyed by categorical column name, in table order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopCategories {
    entries: IndexMap<String, Vec<CategoryCount>>,
}

impl TopCategories {
    /// Get the top categories for a column.
    pub fn get(&self, name: &str) -> Option<&[CategoryCount]> {
        self.entries.get(name).map(|v| v.as_slice())
    }

    /// Iterate per-column tables in table column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CategoryCount])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of columns covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categorical columns were analyzed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count the most frequent values of the table's categorical columns.
///
/// Scans categorical-kind columns in table order and keeps the first
/// `max_columns` of them. Per column, non-missing values are counted and
/// the top `top_k` are returned, sorted by count descending; equal counts
/// keep first-seen (scan) order, so the result is deterministic.
pub fn top_categories(table: &DataTable, max_columns: usize, top_k: usize) -> TopCategories {
    let mut entries = IndexMap::new();

    for (index, name) in table.headers.iter().enumerate() {
        if entries.len() >= max_columns {
            break;
        }
        if !column_dtype(table, index).is_categorical() {
            continue;
        }

        // First-seen accumulation order survives the stable sort below,
        // which is what breaks ties between equal counts.
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for value in table.column_values(index) {
            if DataTable::is_missing_value(value) {
                continue;
            }
            *counts.entry(value.trim()).or_insert(0) += 1;
        }

        let mut top: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(value, count)| CategoryCount {
                value: value.to_string(),
                count,
            })
            .collect();
        top.sort_by(|a, b| b.count.cmp(&a.count));
        top.truncate(top_k);

        entries.insert(name.clone(), top);
    }

    TopCategories { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_counts_and_truncation() {
        let table = make_table(
            vec!["city"],
            vec![
                vec!["A"],
                vec!["B"],
                vec!["A"],
                vec!["C"],
                vec!["A"],
                vec!["B"],
            ],
        );

        let top = top_categories(&table, 5, 2);
        let city = top.get("city").unwrap();
        assert_eq!(city.len(), 2);
        assert_eq!(city[0], CategoryCount { value: "A".into(), count: 3 });
        assert_eq!(city[1], CategoryCount { value: "B".into(), count: 2 });
    }

    #[test]
    fn test_tie_break_is_first_seen() {
        let table = make_table(
            vec!["c"],
            vec![vec!["beta"], vec!["alpha"], vec!["beta"], vec!["alpha"]],
        );

        let top = top_categories(&table, 5, 5);
        let values: Vec<&str> = top
            .get("c")
            .unwrap()
            .iter()
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(values, vec!["beta", "alpha"]);
    }

    #[test]
    fn test_max_columns_cap() {
        let table = make_table(
            vec!["a", "b", "c"],
            vec![vec!["x", "y", "z"], vec!["x", "y", "z"]],
        );

        let top = top_categories(&table, 2, 5);
        assert_eq!(top.len(), 2);
        assert!(top.get("a").is_some());
        assert!(top.get("b").is_some());
        assert!(top.get("c").is_none());
    }

    #[test]
    fn test_skips_non_categorical_columns() {
        let table = make_table(
            vec!["n", "c"],
            vec![vec!["1", "x"], vec!["2", "y"]],
        );

        let top = top_categories(&table, 5, 5);
        assert_eq!(top.len(), 1);
        assert!(top.get("n").is_none());
        assert!(top.get("c").is_some());
    }

    #[test]
    fn test_missing_values_not_counted() {
        let table = make_table(
            vec!["c"],
            vec![vec!["x"], vec![""], vec!["NA"], vec!["x"]],
        );

        let top = top_categories(&table, 5, 5);
        let c = top.get("c").unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].count, 2);
    }

    #[test]
    fn test_no_categorical_columns_is_empty() {
        let table = make_table(vec!["n"], vec![vec!["1"], vec!["2"]]);
        assert!(top_categories(&table, 5, 5).is_empty());
    }
}
