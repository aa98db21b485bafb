//! Double-array construction
//!
//! Patterns are first collected into a sparse pointer-free trie, then placed
//! into the double array one parent at a time in breadth-first order. For
//! each parent the builder searches the lowest `base` whose child slots are
//! all free, trying only bases that put the first child on a vacant slot.
//! Holes that keep rejecting nodes with several children are left to nodes
//! with a single child, so the search stays short on large dictionaries.

use crate::error::{Result, TrieError};
use crate::{Code, CodeMapper, DoubleArrayTrie, PatternId, State, TrieLayout, EMPTY_SLOT, MAX_SLOTS};
use std::collections::{BTreeSet, VecDeque};

/// Initial array length; arrays grow in steps of this size
const GROWTH_STEP: usize = 1024;

/// Failed placements after which a slot is no longer tried for several
/// children
const MAX_MISSES: u8 = 16;

/// Owner marker for the root slot so it is never handed out as a child slot
const ROOT_SLOT_OWNER: u32 = 0;

#[derive(Debug, Default)]
struct SparseNode {
    children: Vec<(Code, usize)>,
    output: Option<PatternId>,
}

/// Builder for [`DoubleArrayTrie`]
#[derive(Debug, Clone)]
pub struct TrieBuilder {
    max_slots: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self {
            max_slots: MAX_SLOTS,
        }
    }
}

impl TrieBuilder {
    /// Create a builder with the default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the length of the double array
    pub fn max_slots(mut self, limit: usize) -> Self {
        self.max_slots = limit.min(MAX_SLOTS);
        self
    }

    /// Build the table and its breadth-first layout
    ///
    /// Duplicate patterns are accepted; the first occurrence owns the
    /// terminal state.
    pub fn build<P: AsRef<[char]>>(&self, patterns: &[P]) -> Result<(DoubleArrayTrie, TrieLayout)> {
        let mapper = CodeMapper::new(patterns);
        let nodes = Self::build_sparse(patterns, &mapper)?;

        let mut arrays = Arrays::new(self.max_slots.min(GROWTH_STEP).max(1));
        let mut layout = TrieLayout::with_slots(arrays.len());
        let mut slot_of = vec![0usize; nodes.len()];
        let mut children: Vec<(Code, State)> = Vec::new();
        let mut num_states = 1;

        let mut queue = VecDeque::new();
        queue.push_back(0usize);

        while let Some(node_id) = queue.pop_front() {
            let node = &nodes[node_id];
            if node.children.is_empty() {
                continue;
            }

            let parent_slot = slot_of[node_id];
            let base = arrays.find_base(&node.children, self.max_slots)?;
            layout.grow(arrays.len());

            children.clear();
            for &(code, child_id) in &node.children {
                let slot = base + code as usize;
                arrays.occupy(slot, parent_slot, nodes[child_id].output);
                slot_of[child_id] = slot;
                children.push((code, State::new(slot as u32)));
                queue.push_back(child_id);
            }
            arrays.base[parent_slot] = base as u32;
            layout.push_children(State::new(parent_slot as u32), &children);
            num_states += children.len();
        }

        let used = arrays.used_len();
        arrays.truncate(used);
        layout.truncate(used);

        let trie = DoubleArrayTrie {
            mapper,
            base: arrays.base,
            check: arrays.check,
            outputs: arrays.outputs,
            num_states,
        };
        Ok((trie, layout))
    }

    fn build_sparse<P: AsRef<[char]>>(patterns: &[P], mapper: &CodeMapper) -> Result<Vec<SparseNode>> {
        let mut nodes = vec![SparseNode::default()];

        for (index, pattern) in patterns.iter().enumerate() {
            let symbols = pattern.as_ref();
            if symbols.is_empty() {
                return Err(TrieError::EmptyPattern { index });
            }

            let mut node_id = 0;
            // Every pattern symbol was registered with the mapper
            for code in symbols.iter().filter_map(|&c| mapper.get(c)) {
                node_id = match nodes[node_id].children.iter().find(|&&(c, _)| c == code) {
                    Some(&(_, child)) => child,
                    None => {
                        let child = nodes.len();
                        nodes.push(SparseNode::default());
                        nodes[node_id].children.push((code, child));
                        child
                    }
                };
            }
            nodes[node_id].output.get_or_insert(index);
        }

        for node in &mut nodes {
            node.children.sort_unstable_by_key(|&(code, _)| code);
        }
        Ok(nodes)
    }
}

struct Arrays {
    base: Vec<u32>,
    check: Vec<u32>,
    outputs: Vec<Option<PatternId>>,
    /// Every free slot below `len`
    vacant: BTreeSet<usize>,
    /// Vacant slots still tried for the first of several children
    candidates: BTreeSet<usize>,
    /// Failed placements per candidate slot
    misses: Vec<u8>,
}

impl Arrays {
    fn new(len: usize) -> Self {
        let mut check = vec![EMPTY_SLOT; len];
        check[0] = ROOT_SLOT_OWNER;
        Self {
            base: vec![0; len],
            check,
            outputs: vec![None; len],
            vacant: (1..len).collect(),
            candidates: (1..len).collect(),
            misses: vec![0; len],
        }
    }

    fn len(&self) -> usize {
        self.check.len()
    }

    fn is_free(&self, slot: usize) -> bool {
        self.check.get(slot).map_or(true, |&owner| owner == EMPTY_SLOT)
    }

    /// Mark `slot` as a child of `owner`
    fn occupy(&mut self, slot: usize, owner: usize, output: Option<PatternId>) {
        self.check[slot] = owner as u32;
        self.outputs[slot] = output;
        self.vacant.remove(&slot);
        self.candidates.remove(&slot);
    }

    /// Lowest base placing every child on a free slot, growing the arrays to
    /// cover it
    ///
    /// Only bases putting the first child on a vacant slot are tried. A slot
    /// that fails [`MAX_MISSES`] placements of several children is no longer
    /// tried for them, though a single child can still take it.
    fn find_base(&mut self, children: &[(Code, usize)], max_slots: usize) -> Result<usize> {
        let first = children[0].0 as usize;
        let last = children[children.len() - 1].0 as usize;

        let found = if children.len() == 1 {
            self.vacant.range(first..).next().map(|&slot| slot - first)
        } else {
            self.find_shared_base(first, &children[1..])
        };
        // Everything past the current end is free
        let base = found.unwrap_or_else(|| self.len().max(first) - first);

        let required = base + last + 1;
        if required > max_slots {
            return Err(TrieError::CapacityExceeded { limit: max_slots });
        }
        self.grow(required, max_slots);
        Ok(base)
    }

    fn find_shared_base(&mut self, first: usize, rest: &[(Code, usize)]) -> Option<usize> {
        let mut found = None;
        let mut exhausted = Vec::new();
        for &slot in self.candidates.range(first..) {
            let base = slot - first;
            if rest.iter().all(|&(code, _)| self.is_free(base + code as usize)) {
                found = Some(base);
                break;
            }
            self.misses[slot] += 1;
            if self.misses[slot] >= MAX_MISSES {
                exhausted.push(slot);
            }
        }
        for slot in exhausted {
            self.candidates.remove(&slot);
        }
        found
    }

    fn grow(&mut self, required: usize, max_slots: usize) {
        if required <= self.len() {
            return;
        }
        let steps = (required - self.len()).div_ceil(GROWTH_STEP);
        let new_len = (self.len() + steps * GROWTH_STEP).min(max_slots);
        self.vacant.extend(self.len()..new_len);
        self.candidates.extend(self.len()..new_len);
        self.misses.resize(new_len, 0);
        self.base.resize(new_len, 0);
        self.check.resize(new_len, EMPTY_SLOT);
        self.outputs.resize(new_len, None);
    }

    /// One past the last occupied slot
    fn used_len(&self) -> usize {
        self.check
            .iter()
            .rposition(|&owner| owner != EMPTY_SLOT)
            .map_or(1, |last| last + 1)
    }

    fn truncate(&mut self, len: usize) {
        self.base.truncate(len);
        self.check.truncate(len);
        self.outputs.truncate(len);
    }
}
