//! Dump command implementation

use super::CommonArgs;
use acmatch_core::Automaton;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the dump command
#[derive(Debug, Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the failure table
    #[arg(long)]
    pub failure: bool,

    /// Print the output table
    #[arg(long)]
    pub output: bool,
}

impl DumpArgs {
    /// Execute the dump command; with neither flag both tables are printed
    pub fn execute(&self) -> Result<bool> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let automaton = self.common.load_automaton()?;
        let stdout = io::stdout();
        self.write_tables(&automaton, &mut stdout.lock())?;
        Ok(true)
    }

    fn write_tables<W: Write>(&self, automaton: &Automaton, out: &mut W) -> Result<()> {
        let both = !self.failure && !self.output;
        if self.failure || both {
            writeln!(out, "failure:")?;
            writeln!(out, "{}", automaton.dump_failure())?;
        }
        if self.output || both {
            writeln!(out, "output:")?;
            writeln!(out, "{}", automaton.dump_output())?;
        }
        out.flush()?;
        Ok(())
    }
}
