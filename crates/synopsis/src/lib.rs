//! Synopsis: column-level profiling and data-quality flags for tabular
//! datasets.
//!
//! Given an already-loaded table, synopsis computes a per-column summary,
//! a missingness report, a Pearson correlation matrix over numeric columns,
//! top-category breakdowns for categorical columns, and a set of heuristic
//! quality flags. It is a quick exploratory aid for a single analyst, not a
//! production service.
//!
//! # Core Principles
//!
//! - **Pure**: every analysis is a side-effect-free function of the table
//! - **Total over degenerate input**: empty tables, all-missing columns and
//!   zero numeric columns produce valid empty outputs, never errors
//! - **One pass, one value**: each call evaluates the complete table and
//!   returns a fresh immutable result
//!
//! # Example
//!
//! ```
//! use synopsis::{DataTable, Profiler};
//!
//! let table = DataTable::new(
//!     vec!["age".into(), "city".into()],
//!     vec![
//!         vec!["31".into(), "Oslo".into()],
//!         vec!["".into(), "Lima".into()],
//!     ],
//!     b',',
//! );
//!
//! let report = Profiler::new().profile_table(&table);
//! assert_eq!(report.summary.n_rows, 2);
//! assert_eq!(report.missingness.get("age").unwrap().missing_count, 1);
//! ```

pub mod analysis;
pub mod error;
pub mod input;
pub mod profile;
pub mod quality;
pub mod summary;

mod profiler;

pub use crate::profiler::{ProfileReport, Profiler, ProfilerConfig};
pub use analysis::{
    CategoryCount, CorrelationMatrix, MissingnessEntry, MissingnessTable, TopCategories,
    correlation_matrix, missing_table, top_categories,
};
pub use error::{Result, SynopsisError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use profile::summarize_dataset;
pub use quality::{QualityConfig, QualityFlags, compute_quality_flags};
pub use summary::{
    ColumnSummary, DatasetSummary, DtypeKind, NumericSummary, SummaryRow, flatten_summary,
};
