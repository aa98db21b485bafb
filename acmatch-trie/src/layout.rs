//! Breadth-first child lists of a built trie

use crate::{Code, State};

/// Children of every state, discovered in breadth-first order
///
/// Stored as one flat edge list plus a `[start, end)` range per slot so the
/// failure builder can enumerate children without probing every code.
#[derive(Debug, Clone, Default)]
pub struct TrieLayout {
    ranges: Vec<(u32, u32)>,
    edges: Vec<(Code, State)>,
}

impl TrieLayout {
    pub(crate) fn with_slots(slots: usize) -> Self {
        Self {
            ranges: vec![(0, 0); slots],
            edges: Vec::new(),
        }
    }

    pub(crate) fn grow(&mut self, slots: usize) {
        if slots > self.ranges.len() {
            self.ranges.resize(slots, (0, 0));
        }
    }

    pub(crate) fn truncate(&mut self, slots: usize) {
        self.ranges.truncate(slots);
    }

    /// Record the children of `parent`; must be called once per parent
    pub(crate) fn push_children(&mut self, parent: State, children: &[(Code, State)]) {
        let start = self.edges.len() as u32;
        self.edges.extend_from_slice(children);
        self.ranges[parent.index()] = (start, self.edges.len() as u32);
    }

    /// Children of `state` as `(code, child)` pairs in ascending code order
    pub fn children(&self, state: State) -> &[(Code, State)] {
        match self.ranges.get(state.index()) {
            Some(&(start, end)) => &self.edges[start as usize..end as usize],
            None => &[],
        }
    }

    /// Total number of parent-child edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}
