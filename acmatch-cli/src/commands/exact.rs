//! Exact command implementation

use super::CommonArgs;
use acmatch_core::Automaton;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the exact command
#[derive(Debug, Args)]
pub struct ExactArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

impl ExactArgs {
    /// Execute the exact command
    ///
    /// Prints `WORD<TAB>yes|no` per word and returns `false` if any word is
    /// not a keyword.
    pub fn execute(&self) -> Result<bool> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let automaton = self.common.load_automaton()?;
        let stdout = io::stdout();
        check_words(&automaton, &self.words, &mut stdout.lock())
    }
}

fn check_words<W: Write>(automaton: &Automaton, words: &[String], out: &mut W) -> Result<bool> {
    let mut all_found = true;
    for word in words {
        let found = automaton.exact_search_str(word).is_some();
        writeln!(out, "{}\t{}", word, if found { "yes" } else { "no" })?;
        all_found &= found;
    }
    out.flush()?;
    Ok(all_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_words() {
        let automaton = Automaton::from_words(["阿根廷", "usher"]).unwrap();
        let mut out = Vec::new();

        let words = vec!["usher".to_string(), "阿根廷".to_string()];
        assert!(check_words(&automaton, &words, &mut out).unwrap());

        let words = vec!["ushers".to_string(), "阿根廷".to_string()];
        assert!(!check_words(&automaton, &words, &mut out).unwrap());

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "usher\tyes\n阿根廷\tyes\nushers\tno\n阿根廷\tyes\n"
        );
    }
}
