//! Failure function construction
//!
//! Walks the trie breadth first. A node's failure link is computed from its
//! parent's, so every parent must be final before its children are visited;
//! the FIFO queue guarantees that.

use super::goto::{goto_code, Transition};
use super::output::OutputIndex;
use acmatch_trie::{DoubleArrayTrie, State, TrieLayout};
use std::collections::VecDeque;

/// Tables computed on top of the trie
pub(crate) struct FailureTables {
    pub failure: Vec<State>,
    pub depth: Vec<u32>,
    pub output: OutputIndex,
}

pub(crate) struct FailureTableBuilder<'a> {
    trie: &'a DoubleArrayTrie,
    layout: &'a TrieLayout,
}

impl<'a> FailureTableBuilder<'a> {
    pub fn new(trie: &'a DoubleArrayTrie, layout: &'a TrieLayout) -> Self {
        Self { trie, layout }
    }

    pub fn build(self) -> FailureTables {
        let slots = self.trie.num_slots();
        let mut failure = vec![State::ROOT; slots];
        let mut depth = vec![0u32; slots];
        let mut output = OutputIndex::with_slots(slots);
        let mut queue = VecDeque::new();

        // Depth-1 states fall back to the root by definition
        for &(_, child) in self.layout.children(State::ROOT) {
            depth[child.index()] = 1;
            output.merge(child, self.trie.own_output(child), State::ROOT);
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            for &(code, child) in self.layout.children(parent) {
                let mut candidate = failure[parent.index()];
                let target = loop {
                    match goto_code(self.trie, candidate, Some(code)) {
                        Transition::Goto(state) => break state,
                        Transition::Fail => candidate = failure[candidate.index()],
                    }
                };

                failure[child.index()] = target;
                depth[child.index()] = depth[parent.index()] + 1;
                output.merge(child, self.trie.own_output(child), target);
                queue.push_back(child);
            }
        }

        FailureTables {
            failure,
            depth,
            output,
        }
    }
}
