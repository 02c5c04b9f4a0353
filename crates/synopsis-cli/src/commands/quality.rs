//! Quality command - print the data-quality flags for a file.

use std::path::PathBuf;

use colored::Colorize;
use synopsis::Profiler;

pub fn run(
    file: PathBuf,
    json: bool,
    strict: bool,
    min_score: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let report = Profiler::new().profile_file(&file)?;
    let flags = &report.flags;

    if json {
        println!("{}", serde_json::to_string_pretty(flags)?);
    } else {
        println!(
            "{} {}",
            "Quality score:".cyan().bold(),
            format!("{:.0}%", flags.quality_score * 100.0).white().bold()
        );

        if flags.has_constant_columns {
            println!(
                "Constant columns ({}): {}",
                flags.constant_columns.len(),
                flags.constant_columns.join(", ").yellow()
            );
        }
        if flags.has_high_cardinality_categoricals {
            for (name, count) in &flags.high_cardinality_columns {
                println!(
                    "High-cardinality categorical: {} ({} distinct)",
                    name.yellow(),
                    count
                );
            }
        }
        if !flags.has_constant_columns && !flags.has_high_cardinality_categoricals {
            println!("{}", "No structural issues found.".green());
        }
    }

    if strict && flags.quality_score < min_score {
        return Err(format!(
            "quality score {:.2} is below the required minimum {:.2}",
            flags.quality_score, min_score
        )
        .into());
    }

    Ok(())
}
