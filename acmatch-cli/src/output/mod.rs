//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One keyword occurrence found in an input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Input file the match was found in
    pub file: String,
    /// The matched keyword
    pub word: String,
    /// Code point index of the first matched symbol
    pub pos: usize,
    /// One past the last matched symbol
    pub end: usize,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single match
    fn format_match(&mut self, record: &MatchRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
