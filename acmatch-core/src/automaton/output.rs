//! Merged output sets

use acmatch_trie::{PatternId, State};
use smallvec::SmallVec;

/// Most states recognize at most a couple of patterns
type OutputList = SmallVec<[PatternId; 2]>;

/// Patterns reported on entering each state
///
/// `output(s)` is the pattern terminating at `s` (if any) followed by
/// `output(failure(s))`. Each list is written once, in breadth-first order,
/// after the list it inherits from is final.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputIndex {
    lists: Vec<OutputList>,
}

impl OutputIndex {
    pub(crate) fn with_slots(slots: usize) -> Self {
        Self {
            lists: vec![OutputList::new(); slots],
        }
    }

    /// Set `output(state) = own ++ output(inherit_from)`
    pub(crate) fn merge(&mut self, state: State, own: Option<PatternId>, inherit_from: State) {
        let mut list: OutputList = own.into_iter().collect();
        list.extend_from_slice(&self.lists[inherit_from.index()]);
        self.lists[state.index()] = list;
    }

    /// Output list of `state`; empty for states outside the table
    #[inline]
    pub fn get(&self, state: State) -> &[PatternId] {
        self.lists.get(state.index()).map_or(&[], |list| list.as_slice())
    }

    /// Iterate over the states with a non-empty output
    pub fn iter(&self) -> impl Iterator<Item = (State, &[PatternId])> {
        self.lists
            .iter()
            .enumerate()
            .filter(|(_, list)| !list.is_empty())
            .map(|(slot, list)| (State::new(slot as u32), list.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_orders_own_before_inherited() {
        let mut index = OutputIndex::with_slots(4);
        index.merge(State::new(1), Some(7), State::ROOT);
        index.merge(State::new(2), None, State::new(1));
        index.merge(State::new(3), Some(9), State::new(1));

        assert_eq!(index.get(State::new(1)), &[7]);
        assert_eq!(index.get(State::new(2)), &[7]);
        assert_eq!(index.get(State::new(3)), &[9, 7]);
        assert!(index.get(State::ROOT).is_empty());
        assert!(index.get(State::new(40)).is_empty());
    }

    #[test]
    fn test_iter_skips_empty_lists() {
        let mut index = OutputIndex::with_slots(3);
        index.merge(State::new(2), Some(0), State::ROOT);
        let entries: Vec<_> = index.iter().collect();
        assert_eq!(entries, vec![(State::new(2), &[0][..])]);
    }
}
