//! The transition function `g`

use super::Automaton;
use acmatch_trie::{Code, DoubleArrayTrie, State};

/// Result of one step of `g`
///
/// `Fail` is not a state: it cannot be stored in a table or fed back into
/// `g`, so it never aliases a real index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move to this state
    Goto(State),
    /// No edge; follow the failure link and retry
    Fail,
}

/// Total transition function on a symbol code
///
/// The root loops to itself on every symbol it has no edge for; any other
/// state reports `Fail`.
#[inline]
pub(crate) fn goto_code(trie: &DoubleArrayTrie, state: State, code: Option<Code>) -> Transition {
    let no_edge = if state.is_root() {
        Transition::Goto(State::ROOT)
    } else {
        Transition::Fail
    };

    match code.and_then(|code| trie.child(state, code)) {
        Some(next) => Transition::Goto(next),
        None => no_edge,
    }
}

impl Automaton {
    /// `g(state, symbol)`
    #[inline]
    pub fn goto(&self, state: State, symbol: char) -> Transition {
        goto_code(&self.trie, state, self.trie.code_of(symbol))
    }

    /// Follow failure links from `state` until `symbol` can be consumed, then
    /// consume it
    ///
    /// Terminates because the root never fails.
    #[inline]
    pub(crate) fn advance(&self, mut state: State, symbol: char) -> State {
        let code = self.trie.code_of(symbol);
        loop {
            match goto_code(&self.trie, state, code) {
                Transition::Goto(next) => return next,
                Transition::Fail => state = self.failure(state),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_loops_on_unknown_symbols() {
        let automaton = Automaton::from_words(["ab"]).unwrap();
        assert_eq!(automaton.goto(State::ROOT, 'z'), Transition::Goto(State::ROOT));
        assert_eq!(automaton.goto(State::ROOT, 'b'), Transition::Goto(State::ROOT));
    }

    #[test]
    fn test_non_root_fails_without_edge() {
        let automaton = Automaton::from_words(["ab", "ca"]).unwrap();
        let Transition::Goto(a) = automaton.goto(State::ROOT, 'a') else {
            panic!("root should have an edge on 'a'");
        };
        assert!(matches!(automaton.goto(a, 'b'), Transition::Goto(_)));
        assert_eq!(automaton.goto(a, 'a'), Transition::Fail);
        assert_eq!(automaton.goto(a, 'c'), Transition::Fail);
        assert_eq!(automaton.goto(a, '?'), Transition::Fail);
    }

    #[test]
    fn test_advance_follows_failure_links() {
        let automaton = Automaton::from_words(["ab", "bc"]).unwrap();
        let a = automaton.advance(State::ROOT, 'a');
        let ab = automaton.advance(a, 'b');
        // "ab" has no 'c' edge; falls back to "b" and continues to "bc"
        let bc = automaton.advance(ab, 'c');
        assert_eq!(automaton.depth(bc), 2);
        assert_eq!(automaton.output(bc), &[1]);
        assert_eq!(automaton.advance(bc, 'x'), State::ROOT);
    }

    #[test]
    fn test_state_from_another_automaton() {
        let small = Automaton::from_words(["ab"]).unwrap();
        let large = Automaton::from_words(["abcdefgh", "bcdefghi"]).unwrap();
        let deep = "abcdefgh"
            .chars()
            .fold(State::ROOT, |state, c| large.advance(state, c));
        assert!(deep.index() >= small.trie().num_slots());

        assert_eq!(small.goto(deep, 'a'), Transition::Fail);
        assert_eq!(small.advance(deep, 'a'), small.advance(State::ROOT, 'a'));
        assert_eq!(small.advance(State::new(u32::MAX - 1), 'z'), State::ROOT);
    }
}
