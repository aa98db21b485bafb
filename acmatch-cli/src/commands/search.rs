//! Search command implementation

use super::CommonArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, MatchRecord, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use acmatch_core::{Automaton, SearchOptions};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Consecutive noise symbols tolerated inside a keyword (0 = strict)
    #[arg(short, long, value_name = "N")]
    pub gap: Option<usize>,

    /// Stop at the first match in each file
    #[arg(long)]
    pub first: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Search files in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `file:pos<TAB>word` line per match
    Text,
    /// JSON array of matches with positions
    Json,
    /// Markdown formatted output
    Markdown,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> Result<bool> {
        self.common.init_logging();

        log::info!("Starting keyword search");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let options = self.search_options(&config);
        let format = self.output_format(&config)?;

        let automaton = self.common.load_automaton()?;
        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(files.len() as u64);

        let search_one = |path: &PathBuf| -> Result<Vec<MatchRecord>> {
            let records = search_file(&automaton, path, options)?;
            progress.file_completed(&path.display().to_string());
            Ok(records)
        };
        let results: Vec<Vec<MatchRecord>> = if self.parallel {
            files.par_iter().map(search_one).collect::<Result<_>>()?
        } else {
            files.iter().map(search_one).collect::<Result<_>>()?
        };
        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut total = 0;
        for record in results.iter().flatten() {
            formatter.format_match(record)?;
            total += 1;
        }
        formatter.finish()?;

        log::info!("Found {} matches in {} files", total, files.len());
        Ok(true)
    }

    /// Command-line flags over config file values
    fn search_options(&self, config: &CliConfig) -> SearchOptions {
        SearchOptions::default()
            .with_gap_budget(self.gap.unwrap_or(config.search.gap_budget))
            .with_stop_at_first(self.first || config.search.stop_at_first)
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }
}

/// Search one file and convert its terms into output records
fn search_file(automaton: &Automaton, path: &Path, options: SearchOptions) -> Result<Vec<MatchRecord>> {
    let content = FileReader::read_chars(path)?;
    let file = path.display().to_string();

    let records: Vec<MatchRecord> = automaton
        .multi_pattern_search(&content, options)
        .into_iter()
        .map(|term| MatchRecord {
            file: file.clone(),
            word: term.word_string(),
            pos: term.pos,
            end: term.end,
        })
        .collect();

    log::debug!(
        "{}: {} symbols, {} matches",
        file,
        content.len(),
        records.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(gap: Option<usize>, first: bool, format: Option<OutputFormat>) -> SearchArgs {
        SearchArgs {
            common: CommonArgs {
                dictionary: PathBuf::from("words.txt"),
                quiet: true,
                verbose: 0,
            },
            input: vec!["input.txt".to_string()],
            gap,
            first,
            format,
            output: None,
            config: None,
            parallel: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            search: SearchOptions::first_only().with_gap_budget(2),
            ..CliConfig::default()
        };

        let options = args(None, false, None).search_options(&config);
        assert_eq!(options, SearchOptions::first_only().with_gap_budget(2));

        let options = args(Some(0), false, None).search_options(&config);
        assert_eq!(options.gap_budget, 0);
        assert!(options.stop_at_first);
    }

    #[test]
    fn test_output_format_resolution() {
        let mut config = CliConfig::default();
        config.output.default_format = "Markdown".to_string();
        assert_eq!(
            args(None, false, None).output_format(&config).unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(
            args(None, false, Some(OutputFormat::Json))
                .output_format(&config)
                .unwrap(),
            OutputFormat::Json
        );

        config.output.default_format = "yaml".to_string();
        let err = args(None, false, None).output_format(&config).unwrap_err();
        assert!(err.to_string().contains("unknown output format 'yaml'"));
    }

    #[test]
    fn test_search_file_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("news.txt");
        fs::write(&path, "阿拉1伯埃32及阿根廷").unwrap();

        let automaton = Automaton::from_words(["阿拉伯", "埃及", "阿根廷"]).unwrap();
        let records = search_file(&automaton, &path, SearchOptions::strict()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "阿根廷");
        assert_eq!((records[0].pos, records[0].end), (8, 11));

        let records = search_file(&automaton, &path, SearchOptions::default().with_gap_budget(3)).unwrap();
        let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["阿拉伯", "埃及", "阿根廷"]);
    }
}
