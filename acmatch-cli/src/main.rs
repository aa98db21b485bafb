//! acmatch: search text files for dictionary keywords

use acmatch_cli::commands::Commands;
use clap::Parser;
use std::process::ExitCode;

/// Aho-Corasick keyword search with gap-tolerant matching
#[derive(Debug, Parser)]
#[command(name = "acmatch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
