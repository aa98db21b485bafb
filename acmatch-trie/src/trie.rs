//! The double-array transition table

use crate::{CodeMapper, Code, PatternId, State, EMPTY_SLOT};

/// Read-only double-array trie
///
/// `base[s] + code` gives the candidate slot of the child; the child exists
/// only if `check` at that slot names `s` as its owner. The slot index is the
/// child state.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleArrayTrie {
    pub(crate) mapper: CodeMapper,
    pub(crate) base: Vec<u32>,
    pub(crate) check: Vec<u32>,
    /// Pattern terminating exactly at each slot, before any failure merge
    pub(crate) outputs: Vec<Option<PatternId>>,
    pub(crate) num_states: usize,
}

impl DoubleArrayTrie {
    /// Dense code of `c`, `None` if no pattern uses it
    #[inline]
    pub fn code_of(&self, c: char) -> Option<Code> {
        self.mapper.get(c)
    }

    /// Candidate slot for the child of `state` on `code`
    ///
    /// The slot may lie past [`num_slots`](Self::num_slots) and may belong to
    /// another state; callers confirm with [`owner`](Self::owner). `None` if
    /// `state` is not a slot of this trie.
    #[inline]
    pub fn slot(&self, state: State, code: Code) -> Option<usize> {
        self.base
            .get(state.index())
            .map(|&base| base as usize + code as usize)
    }

    /// State owning `slot` according to the check array
    #[inline]
    pub fn owner(&self, slot: usize) -> Option<State> {
        match self.check.get(slot) {
            Some(&owner) if owner != EMPTY_SLOT => Some(State::new(owner)),
            _ => None,
        }
    }

    /// Child of `state` on `code`, if the trie has that edge
    #[inline]
    pub fn child(&self, state: State, code: Code) -> Option<State> {
        let slot = self.slot(state, code)?;
        if self.owner(slot) == Some(state) {
            Some(State::new(slot as u32))
        } else {
            None
        }
    }

    /// Pattern that terminates exactly at `state`
    #[inline]
    pub fn own_output(&self, state: State) -> Option<PatternId> {
        self.outputs.get(state.index()).copied().flatten()
    }

    /// Pattern equal to the whole of `symbols`, walking from the root
    pub fn exact_match(&self, symbols: &[char]) -> Option<PatternId> {
        let mut state = State::ROOT;
        for &c in symbols {
            state = self.child(state, self.code_of(c)?)?;
        }
        self.own_output(state)
    }

    /// Length of the `base`/`check` arrays
    pub fn num_slots(&self) -> usize {
        self.base.len()
    }

    /// Number of occupied slots, the root included
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Number of distinct symbols over all patterns
    pub fn alphabet_size(&self) -> usize {
        self.mapper.alphabet_size()
    }
}

#[cfg(test)]
mod tests {
    use crate::TrieBuilder;

    fn build(list: &[&str]) -> crate::DoubleArrayTrie {
        let patterns: Vec<Vec<char>> = list.iter().map(|w| w.chars().collect()).collect();
        TrieBuilder::new().build(&patterns).unwrap().0
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_exact_match_hits_and_misses() {
        let trie = build(&["he", "she", "his", "hers"]);
        assert_eq!(trie.exact_match(&chars("he")), Some(0));
        assert_eq!(trie.exact_match(&chars("hers")), Some(3));
        assert_eq!(trie.exact_match(&chars("her")), None);
        assert_eq!(trie.exact_match(&chars("hex")), None);
        assert_eq!(trie.exact_match(&[]), None);
    }

    #[test]
    fn test_child_requires_ownership() {
        let trie = build(&["ab", "ba"]);
        let a = trie.code_of('a').unwrap();
        let b = trie.code_of('b').unwrap();
        let state_a = trie.child(crate::State::ROOT, a).unwrap();
        assert!(trie.child(state_a, b).is_some());
        assert!(trie.child(state_a, a).is_none());
    }

    #[test]
    fn test_unknown_state_has_no_edges() {
        let trie = build(&["ab", "ba"]);
        let a = trie.code_of('a').unwrap();
        let outside = crate::State::new(trie.num_slots() as u32 + 1_000);
        assert_eq!(trie.slot(outside, a), None);
        assert_eq!(trie.child(outside, a), None);
        assert_eq!(trie.own_output(outside), None);
    }

    #[test]
    fn test_state_count() {
        // root, h, he, s, sh, she
        let trie = build(&["he", "she"]);
        assert_eq!(trie.num_states(), 6);
        assert_eq!(trie.alphabet_size(), 3);
    }
}
