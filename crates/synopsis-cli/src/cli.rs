//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Synopsis: quick profiling for tabular datasets
#[derive(Parser)]
#[command(name = "synopsis")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and print the full report
    Profile {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the report as JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (auto-detected when omitted)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Rows kept per top-category table
        #[arg(long, default_value = "10")]
        top_k: usize,

        /// Maximum number of categorical columns to break down
        #[arg(long, default_value = "20")]
        max_categorical: usize,

        /// Maximum rows to read from the file
        #[arg(long)]
        max_rows: Option<usize>,
    },

    /// Print only the data-quality flags for a file
    Quality {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the flags as JSON
        #[arg(long)]
        json: bool,

        /// Exit nonzero when the score falls below --min-score
        #[arg(long)]
        strict: bool,

        /// Minimum acceptable quality score for --strict
        #[arg(long, default_value = "0.7")]
        min_score: f64,
    },
}
