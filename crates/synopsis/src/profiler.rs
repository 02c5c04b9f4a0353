//! Main Profiler struct and public API.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{
    CorrelationMatrix, MissingnessTable, TopCategories, correlation_matrix, missing_table,
    top_categories,
};
use crate::error::{Result, SynopsisError};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::profile::summarize_dataset;
use crate::quality::{QualityConfig, QualityFlags, compute_quality_flags};
use crate::summary::DatasetSummary;

/// Configuration for a profiling run.
#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Parser configuration for file input.
    pub parser: ParserConfig,
    /// Rows kept per top-category table.
    pub top_k: usize,
    /// Maximum number of categorical columns to break down.
    pub max_categorical_columns: usize,
    /// Thresholds for quality-flag computation.
    pub quality: QualityConfig,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            top_k: 10,
            max_categorical_columns: 20,
            quality: QualityConfig::default(),
        }
    }
}

/// Full profiling output for one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Metadata about the source file (absent for in-memory tables).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// Per-column summary.
    pub summary: DatasetSummary,
    /// Per-column missingness.
    pub missingness: MissingnessTable,
    /// Pearson correlations among numeric columns.
    pub correlations: CorrelationMatrix,
    /// Top categories for categorical columns.
    pub top_categories: TopCategories,
    /// Derived quality flags.
    pub flags: QualityFlags,
}

impl ProfileReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| SynopsisError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// The profiling engine: loads a table and runs every analysis over it.
pub struct Profiler {
    config: ProfilerConfig,
    parser: Parser,
}

impl Profiler {
    /// Create a profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// Load a delimited file and profile it.
    pub fn profile_file(&self, path: impl AsRef<Path>) -> Result<ProfileReport> {
        let (table, source) = self.parser.parse_file(path)?;
        let mut report = self.profile_table(&table);
        report.source = Some(source);
        Ok(report)
    }

    /// Profile an already-loaded table.
    ///
    /// The analyses are independent of each other; the flag engine consumes
    /// the summary and missingness outputs, never the raw table.
    pub fn profile_table(&self, table: &DataTable) -> ProfileReport {
        let summary = summarize_dataset(table);
        let missingness = missing_table(table);
        let correlations = correlation_matrix(table);
        let top_categories = top_categories(
            table,
            self.config.max_categorical_columns,
            self.config.top_k,
        );
        let flags = compute_quality_flags(&summary, &missingness, &self.config.quality);

        ProfileReport {
            source: None,
            summary,
            missingness,
            correlations,
            top_categories,
            flags,
        }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
