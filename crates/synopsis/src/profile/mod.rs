//! Column profiling: kind inference and summary statistics.

mod dtype;
mod summarize;

pub use dtype::{column_dtype, infer_kind};
pub use summarize::summarize_dataset;
