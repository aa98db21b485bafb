//! Multi-pattern search
//!
//! [`Automaton::multi_pattern_search`] dispatches on the gap budget: a
//! budget of zero runs the strict scanner, anything larger runs the
//! gap-tolerant one.

mod gapped;
mod strict;

use crate::{Automaton, Term};
use acmatch_trie::PatternId;

/// Search flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Return as soon as the first match is found
    pub stop_at_first: bool,
    /// Maximum number of consecutive noise symbols tolerated between two
    /// keyword symbols; 0 means strict matching
    pub gap_budget: usize,
}

impl SearchOptions {
    /// Report every contiguous occurrence
    pub fn strict() -> Self {
        Self::default()
    }

    /// Report only the first occurrence found
    pub fn first_only() -> Self {
        Self {
            stop_at_first: true,
            ..Self::default()
        }
    }

    /// Set the gap budget
    pub fn with_gap_budget(mut self, gap_budget: usize) -> Self {
        self.gap_budget = gap_budget;
        self
    }

    /// Set whether to stop at the first match
    pub fn with_stop_at_first(mut self, stop_at_first: bool) -> Self {
        self.stop_at_first = stop_at_first;
        self
    }
}

impl Automaton {
    /// Scan `content` once and report keyword occurrences in discovery order
    pub fn multi_pattern_search<'a>(&'a self, content: &[char], options: SearchOptions) -> Vec<Term<'a>> {
        if options.gap_budget == 0 {
            strict::search(self, content, options.stop_at_first)
        } else {
            gapped::search(self, content, options)
        }
    }

    /// [`multi_pattern_search`](Self::multi_pattern_search) over a `&str`;
    /// positions are still code point indices
    pub fn search_str(&self, text: &str, options: SearchOptions) -> Vec<Term<'_>> {
        let content: Vec<char> = text.chars().collect();
        self.multi_pattern_search(&content, options)
    }

    /// Term for a contiguous match of `pattern` whose last symbol is at `last`
    #[inline]
    pub(crate) fn term_ending_at(&self, pattern: PatternId, last: usize) -> Term<'_> {
        let word = self.pattern(pattern);
        Term {
            pos: last + 1 - word.len(),
            end: last + 1,
            pattern,
            word,
        }
    }
}
