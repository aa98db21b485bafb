//! Match results

use acmatch_trie::PatternId;
use std::fmt;

/// One reported keyword occurrence
///
/// Positions are code point indices into the searched content. `end` is one
/// past the last matched symbol, so a contiguous match has
/// `end - pos == word.len()` and a gapped match spans more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term<'a> {
    /// Position of the first matched symbol
    pub pos: usize,
    /// One past the last matched symbol
    pub end: usize,
    /// Index of the keyword in the pattern set
    pub pattern: PatternId,
    /// The matched keyword
    pub word: &'a [char],
}

impl Term<'_> {
    /// The keyword as a `String`
    pub fn word_string(&self) -> String {
        self.word.iter().collect()
    }

    /// Number of content symbols covered, noise included
    pub fn span(&self) -> usize {
        self.end - self.pos
    }

    /// Whether noise symbols were skipped inside the match
    pub fn is_gapped(&self) -> bool {
        self.span() > self.word.len()
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}", self.word_string(), self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_term() {
        let word = ['埃', '及'];
        let term = Term {
            pos: 4,
            end: 6,
            pattern: 1,
            word: &word,
        };
        assert_eq!(term.span(), 2);
        assert!(!term.is_gapped());
        assert_eq!(term.to_string(), "埃及 @4");
    }

    #[test]
    fn test_gapped_term() {
        let word = ['埃', '及'];
        let term = Term {
            pos: 4,
            end: 8,
            pattern: 1,
            word: &word,
        };
        assert_eq!(term.span(), 4);
        assert!(term.is_gapped());
        assert_eq!(term.word_string(), "埃及");
    }
}
