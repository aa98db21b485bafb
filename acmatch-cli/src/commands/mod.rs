//! CLI command implementations

use crate::error::CliError;
use acmatch_core::{load_dictionary_file, Automaton};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

pub mod dump;
pub mod exact;
pub mod search;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search files for every keyword of a dictionary
    Search(search::SearchArgs),

    /// Check whether whole words are keywords
    Exact(exact::ExactArgs),

    /// Print the failure and output tables of the built automaton
    Dump(dump::DumpArgs),
}

impl Commands {
    /// Run the selected command
    ///
    /// `Ok(false)` means the command ran but reports a negative outcome,
    /// which the binary turns into a non-zero exit status.
    pub fn execute(&self) -> Result<bool> {
        match self {
            Commands::Search(args) => args.execute(),
            Commands::Exact(args) => args.execute(),
            Commands::Dump(args) => args.execute(),
        }
    }
}

/// Dictionary and logging flags shared by every command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Keyword file, one keyword per line
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger installed earlier in the same process stays in place
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Load the dictionary and build the automaton
    pub fn load_automaton(&self) -> Result<Automaton> {
        load_automaton(&self.dictionary)
    }
}

/// Build an automaton from a dictionary file
pub fn load_automaton(path: &Path) -> Result<Automaton> {
    let words = load_dictionary_file(path)
        .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
    log::info!("Loaded {} keywords from {}", words.len(), path.display());

    let automaton = Automaton::build(&words)
        .map_err(|e| CliError::DictionaryError(format!("{}: {e}", path.display())))?;
    log::info!(
        "Built automaton with {} states over {} symbols",
        automaton.num_states(),
        automaton.trie().alphabet_size()
    );
    Ok(automaton)
}
