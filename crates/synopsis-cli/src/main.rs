//! Synopsis CLI - quick profiling for tabular datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Profile {
            file,
            json,
            output,
            delimiter,
            top_k,
            max_categorical,
            max_rows,
        } => commands::profile::run(
            file,
            json,
            output,
            delimiter,
            top_k,
            max_categorical,
            max_rows,
            cli.verbose,
        ),

        Commands::Quality {
            file,
            json,
            strict,
            min_score,
        } => commands::quality::run(file, json, strict, min_score),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
