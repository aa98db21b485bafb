//! Markdown output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs matches as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    match_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            match_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_match(&mut self, record: &MatchRecord) -> Result<()> {
        self.match_count += 1;
        writeln!(
            self.writer,
            "{}. **{}** in `{}` at {}..{}",
            self.match_count, record.word, record.file, record.pos, record.end
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total matches: {}*", self.match_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
