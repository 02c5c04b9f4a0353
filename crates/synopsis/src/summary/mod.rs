//! Data model for per-column and dataset-level summaries.

mod column;
mod dataset;
mod flatten;
mod types;

pub use column::{ColumnSummary, NumericSummary};
pub use dataset::DatasetSummary;
pub use flatten::{SummaryRow, flatten_summary};
pub use types::DtypeKind;
