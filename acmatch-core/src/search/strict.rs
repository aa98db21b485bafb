//! Strict scanner: contiguous occurrences only

use crate::{Automaton, Term};
use acmatch_trie::State;

/// One left-to-right pass; a failed transition retries at the same position
/// after following the failure link
pub(crate) fn search<'a>(automaton: &'a Automaton, content: &[char], stop_at_first: bool) -> Vec<Term<'a>> {
    let mut terms = Vec::new();
    let mut state = State::ROOT;

    for (pos, &symbol) in content.iter().enumerate() {
        state = automaton.advance(state, symbol);

        for &pattern in automaton.output(state) {
            terms.push(automaton.term_ending_at(pattern, pos));
            if stop_at_first {
                return terms;
            }
        }
    }

    terms
}
