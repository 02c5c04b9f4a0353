//! Column kind inference.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::DataTable;
use crate::summary::DtypeKind;

// Date-shaped prefixes, compiled once on first use. A regex hit alone is
// not enough; the value must also parse with chrono.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(), // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(), // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(), // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(), // Alt ISO
    ]
});

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Detect the kind of a single non-missing value.
fn detect_value_kind(value: &str) -> DtypeKind {
    let trimmed = value.trim();

    if matches!(
        trimmed.to_lowercase().as_str(),
        "true" | "false" | "yes" | "no"
    ) {
        return DtypeKind::Boolean;
    }

    if trimmed.parse::<f64>().is_ok() {
        return DtypeKind::Numeric;
    }

    if is_datetime_value(trimmed) {
        return DtypeKind::Datetime;
    }

    DtypeKind::Categorical
}

/// Check whether a value is a parseable date or datetime.
fn is_datetime_value(value: &str) -> bool {
    if !DATE_PATTERNS.iter().any(|pattern| pattern.is_match(value)) {
        return false;
    }

    if value.contains(':') {
        DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
    } else {
        DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
    }
}

/// Infer the kind of a column from its values by majority vote.
///
/// Missing values are skipped; a column with no non-missing values is
/// [`DtypeKind::Other`]. Ties resolve in the fixed order numeric, boolean,
/// datetime, categorical, so the result is deterministic.
pub fn infer_kind<'a>(values: impl IntoIterator<Item = &'a str>) -> DtypeKind {
    const KINDS: [DtypeKind; 4] = [
        DtypeKind::Numeric,
        DtypeKind::Boolean,
        DtypeKind::Datetime,
        DtypeKind::Categorical,
    ];

    let mut counts = [0usize; 4];
    for value in values {
        if DataTable::is_missing_value(value) {
            continue;
        }
        let slot = match detect_value_kind(value) {
            DtypeKind::Numeric => 0,
            DtypeKind::Boolean => 1,
            DtypeKind::Datetime => 2,
            _ => 3,
        };
        counts[slot] += 1;
    }

    if counts.iter().all(|&c| c == 0) {
        return DtypeKind::Other;
    }

    let mut best = 0;
    for (slot, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = slot;
        }
    }
    KINDS[best]
}

/// Infer the kind of a table column by index.
pub fn column_dtype(table: &DataTable, index: usize) -> DtypeKind {
    infer_kind(table.column_values(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_numeric_values() {
        assert_eq!(detect_value_kind("42"), DtypeKind::Numeric);
        assert_eq!(detect_value_kind("3.14"), DtypeKind::Numeric);
        assert_eq!(detect_value_kind("-1e6"), DtypeKind::Numeric);
    }

    #[test]
    fn test_detect_boolean_values() {
        assert_eq!(detect_value_kind("true"), DtypeKind::Boolean);
        assert_eq!(detect_value_kind("No"), DtypeKind::Boolean);
        // Bare 1/0 stays numeric
        assert_eq!(detect_value_kind("1"), DtypeKind::Numeric);
    }

    #[test]
    fn test_detect_datetime_values() {
        assert_eq!(detect_value_kind("2024-01-15"), DtypeKind::Datetime);
        assert_eq!(detect_value_kind("01/15/2024"), DtypeKind::Datetime);
        assert_eq!(detect_value_kind("2024-01-15 08:30:00"), DtypeKind::Datetime);
        // Date-shaped but not a real date
        assert_eq!(detect_value_kind("9999-99-99"), DtypeKind::Categorical);
    }

    #[test]
    fn test_detect_categorical_values() {
        assert_eq!(detect_value_kind("red"), DtypeKind::Categorical);
        assert_eq!(detect_value_kind("A-12x"), DtypeKind::Categorical);
    }

    #[test]
    fn test_infer_majority_vote() {
        let kind = infer_kind(["1", "2", "oops", "4"]);
        assert_eq!(kind, DtypeKind::Numeric);

        let kind = infer_kind(["a", "b", "3"]);
        assert_eq!(kind, DtypeKind::Categorical);
    }

    #[test]
    fn test_infer_skips_missing() {
        let kind = infer_kind(["", "NA", "2.5", "3.5"]);
        assert_eq!(kind, DtypeKind::Numeric);
    }

    #[test]
    fn test_infer_all_missing_is_other() {
        assert_eq!(infer_kind(["", "NA", "null"]), DtypeKind::Other);
        assert_eq!(infer_kind([]), DtypeKind::Other);
    }
}
