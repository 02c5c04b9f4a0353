//! Example: profile a tabular data file with synopsis.
//!
//! Usage:
//!   cargo run --example profile -- <file_path>

use std::env;
use std::path::Path;

use synopsis::{Profiler, flatten_summary};

fn main() -> synopsis::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    if !Path::new(file_path).exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let report = Profiler::new().profile_file(file_path)?;

    println!(
        "{} rows x {} columns",
        report.summary.n_rows, report.summary.n_cols
    );
    println!();

    for row in flatten_summary(&report.summary) {
        println!(
            "  {:20} {:12} missing={:<5} distinct={}",
            row.name,
            row.dtype.to_string(),
            row.n_missing,
            row.n_distinct
        );
    }

    println!();
    println!("Quality score: {:.0}%", report.flags.quality_score * 100.0);

    Ok(())
}
