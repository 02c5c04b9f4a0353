//! The closed set of column kind tags.

use serde::{Deserialize, Serialize};

/// Inferred kind of a column.
///
/// Decided once during profiling; downstream consumers branch on the tag
/// and never re-derive it from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtypeKind {
    /// Integer or floating-point values.
    Numeric,
    /// Discrete string values.
    Categorical,
    /// Boolean values (true/false, yes/no).
    Boolean,
    /// Date and/or time values.
    Datetime,
    /// Empty or undeterminable (e.g. an all-missing column).
    Other,
}

impl DtypeKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DtypeKind::Numeric)
    }

    /// Returns true if this kind is categorical.
    pub fn is_categorical(&self) -> bool {
        matches!(self, DtypeKind::Categorical)
    }
}

impl Default for DtypeKind {
    fn default() -> Self {
        DtypeKind::Other
    }
}

impl std::fmt::Display for DtypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DtypeKind::Numeric => "numeric",
            DtypeKind::Categorical => "categorical",
            DtypeKind::Boolean => "boolean",
            DtypeKind::Datetime => "datetime",
            DtypeKind::Other => "other",
        };
        write!(f, "{}", name)
    }
}
