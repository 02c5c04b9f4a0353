//! Profile command - run every analysis on a file and render the report.

use std::path::PathBuf;

use colored::Colorize;
use synopsis::{
    ParserConfig, ProfileReport, Profiler, ProfilerConfig, SynopsisError, flatten_summary,
};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    delimiter: Option<char>,
    top_k: usize,
    max_categorical: usize,
    max_rows: Option<usize>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let delimiter = match delimiter {
        Some(c) if c.is_ascii() => Some(c as u8),
        Some(c) => return Err(SynopsisError::InvalidDelimiter(c.to_string()).into()),
        None => None,
    };

    let config = ProfilerConfig {
        parser: ParserConfig {
            delimiter,
            max_rows,
            ..ParserConfig::default()
        },
        top_k,
        max_categorical_columns: max_categorical,
        ..ProfilerConfig::default()
    };

    let report = Profiler::with_config(config).profile_file(&file)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        render(&report, &file, verbose);
    }

    if let Some(path) = output {
        report.save(&path)?;
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

fn render(report: &ProfileReport, file: &PathBuf, verbose: bool) {
    println!(
        "{} {}",
        "Profiled".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "{} rows x {} columns",
        report.summary.n_rows.to_string().white().bold(),
        report.summary.n_cols.to_string().white().bold()
    );

    if let Some(source) = &report.source {
        if verbose {
            println!("  format: {}  size: {} bytes", source.format, source.size_bytes);
            println!("  {}", source.hash.dimmed());
        }
    }

    println!();
    println!("{}", "Columns:".yellow().bold());
    println!(
        "  {:20} {:12} {:>8} {:>9} {:>9} {:>10} {:>10}",
        "name", "dtype", "missing", "share", "distinct", "mean", "std"
    );
    for row in flatten_summary(&report.summary) {
        println!(
            "  {:20} {:12} {:>8} {:>8.1}% {:>9} {:>10} {:>10}",
            row.name,
            row.dtype.to_string(),
            row.n_missing,
            row.missing_share * 100.0,
            row.n_distinct,
            fmt_stat(row.mean),
            fmt_stat(row.std),
        );
    }

    if !report.correlations.is_empty() {
        println!();
        println!("{}", "Correlations (Pearson):".yellow().bold());
        let names: Vec<&str> = report.correlations.columns().collect();
        print!("  {:12}", "");
        for name in &names {
            print!(" {:>10}", truncate(name, 10));
        }
        println!();
        for a in &names {
            print!("  {:12}", truncate(a, 12));
            for b in &names {
                match report.correlations.get(a, b) {
                    Some(r) if !r.is_nan() => print!(" {:>10.3}", r),
                    _ => print!(" {:>10}", "-"),
                }
            }
            println!();
        }
    }

    if !report.top_categories.is_empty() {
        println!();
        println!("{}", "Top categories:".yellow().bold());
        for (name, counts) in report.top_categories.iter() {
            println!("  {}", name.white().bold());
            for entry in counts {
                println!("    {:20} {}", entry.value, entry.count);
            }
        }
    }

    println!();
    let flags = &report.flags;
    println!(
        "Quality score: {}",
        format!("{:.0}%", flags.quality_score * 100.0).white().bold()
    );
    if flags.has_constant_columns {
        println!(
            "{} constant columns: {}",
            "!".yellow().bold(),
            flags.constant_columns.join(", ")
        );
    }
    if flags.has_high_cardinality_categoricals {
        let listed: Vec<String> = flags
            .high_cardinality_columns
            .iter()
            .map(|(name, count)| format!("{} ({})", name, count))
            .collect();
        println!(
            "{} high-cardinality categoricals: {}",
            "!".yellow().bold(),
            listed.join(", ")
        );
    }
    if !flags.has_constant_columns && !flags.has_high_cardinality_categoricals {
        println!("{}", "No structural issues found.".green());
    }
}

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let kept: String = name.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
