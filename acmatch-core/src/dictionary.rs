//! Keyword list loading
//!
//! One keyword per line. Surrounding whitespace is trimmed and blank lines
//! are skipped; the last line does not need a trailing newline.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read keywords from any buffered reader
pub fn load_dictionary<R: BufRead>(reader: R) -> io::Result<Vec<Vec<char>>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.chars().collect());
        }
    }
    log::debug!("loaded {} keywords", words.len());
    Ok(words)
}

/// Read keywords from a file
pub fn load_dictionary_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Vec<char>>> {
    let file = File::open(path)?;
    load_dictionary(BufReader::new(file))
}
