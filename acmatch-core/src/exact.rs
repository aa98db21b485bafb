//! Whole-input keyword check

use crate::{Automaton, Term};

impl Automaton {
    /// Term at position 0 if `content` is itself one of the keywords
    ///
    /// Walks the trie from the root only; failure links and output sets are
    /// not involved.
    pub fn exact_search(&self, content: &[char]) -> Option<Term<'_>> {
        let pattern = self.trie().exact_match(content)?;
        let word = self.pattern(pattern);
        Some(Term {
            pos: 0,
            end: word.len(),
            pattern,
            word,
        })
    }

    /// [`exact_search`](Self::exact_search) over a `&str`
    pub fn exact_search_str(&self, text: &str) -> Option<Term<'_>> {
        let content: Vec<char> = text.chars().collect();
        self.exact_search(&content)
    }
}
