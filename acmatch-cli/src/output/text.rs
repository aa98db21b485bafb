//! Plain text output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs `file:pos<TAB>word`, one match per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_match(&mut self, record: &MatchRecord) -> Result<()> {
        writeln!(self.writer, "{}:{}\t{}", record.file, record.pos, record.word)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_match(&MatchRecord {
                file: "news.txt".into(),
                word: "阿根廷".into(),
                pos: 12,
                end: 15,
            })
            .unwrap();
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "news.txt:12\t阿根廷\n");
    }
}
