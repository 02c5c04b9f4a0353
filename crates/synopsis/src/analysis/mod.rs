//! Independent table-level analyses: missingness, correlation, categories.

mod categories;
mod correlation;
mod missingness;

pub use categories::{CategoryCount, TopCategories, top_categories};
pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use missingness::{MissingnessEntry, MissingnessTable, missing_table};
