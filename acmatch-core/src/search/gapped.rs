//! Gap-tolerant scanner
//!
//! The main pass is the strict scanner, so every contiguous occurrence is
//! reported exactly as in strict mode. In addition, whenever a non-root
//! state cannot consume the current symbol, a bounded excursion treats that
//! symbol (and up to `gap_budget - 1` following ones) as noise and keeps
//! walking the same trie path. Keywords completed on the excursion that span
//! at least one skipped symbol are reported as gapped matches.
//!
//! Excursions work on a private copy of the scan state: when one ends, the
//! main pass resumes at the failing position through the failure link, so
//! symbols an excursion skipped are still scanned normally.

use crate::{Automaton, SearchOptions, Term, Transition};
use acmatch_trie::{PatternId, State};
use std::collections::HashSet;

pub(crate) fn search<'a>(automaton: &'a Automaton, content: &[char], options: SearchOptions) -> Vec<Term<'a>> {
    GapScan {
        automaton,
        content,
        gap_budget: options.gap_budget,
        stop_at_first: options.stop_at_first,
        terms: Vec::new(),
        reported: HashSet::new(),
        run: Vec::new(),
    }
    .scan()
}

struct GapScan<'a, 'c> {
    automaton: &'a Automaton,
    content: &'c [char],
    gap_budget: usize,
    stop_at_first: bool,
    terms: Vec<Term<'a>>,
    /// (start, end, pattern) of every gapped term already reported
    reported: HashSet<(usize, usize, PatternId)>,
    /// Content positions of the symbols on the current excursion path
    run: Vec<usize>,
}

impl<'a> GapScan<'a, '_> {
    fn scan(mut self) -> Vec<Term<'a>> {
        let automaton = self.automaton;
        let mut state = State::ROOT;

        for (pos, &symbol) in self.content.iter().enumerate() {
            loop {
                match automaton.goto(state, symbol) {
                    Transition::Goto(next) => {
                        state = next;
                        break;
                    }
                    Transition::Fail => {
                        if self.excursion(state, pos) {
                            return self.terms;
                        }
                        state = automaton.failure(state);
                    }
                }
            }

            for &pattern in automaton.output(state) {
                self.terms.push(automaton.term_ending_at(pattern, pos));
                if self.stop_at_first {
                    return self.terms;
                }
            }
        }

        self.terms
    }

    /// Walk on from `from`, which failed on the symbol at `pos`, treating
    /// that symbol as the first skipped one
    ///
    /// Returns `true` when the search should stop.
    fn excursion(&mut self, from: State, pos: usize) -> bool {
        let automaton = self.automaton;
        let depth = automaton.depth(from);
        log::trace!("gap excursion from state {from} (depth {depth}) at {pos}");

        // `from` was reached by the contiguous run ending just before `pos`
        self.run.clear();
        self.run.extend(pos - depth..pos);

        let mut state = from;
        let mut skipped = 1;
        for (at, &symbol) in self.content.iter().enumerate().skip(pos + 1) {
            match automaton.goto(state, symbol) {
                Transition::Goto(next) => {
                    state = next;
                    skipped = 0;
                    self.run.push(at);
                    if self.report_gapped(state) {
                        return true;
                    }
                }
                Transition::Fail if skipped < self.gap_budget => skipped += 1,
                Transition::Fail => break,
            }
        }

        false
    }

    /// Report the outputs of `state` whose span on the run contains a gap
    ///
    /// Contiguous ones are left to the main pass. Returns `true` when the
    /// search should stop.
    fn report_gapped(&mut self, state: State) -> bool {
        let automaton = self.automaton;
        let Some(&last) = self.run.last() else {
            return false;
        };
        let end = last + 1;

        for &pattern in automaton.output(state) {
            let word = automaton.pattern(pattern);
            let start = self.run[self.run.len() - word.len()];
            if end - start == word.len() || !self.reported.insert((start, end, pattern)) {
                continue;
            }

            self.terms.push(Term {
                pos: start,
                end,
                pattern,
                word,
            });
            if self.stop_at_first {
                return true;
            }
        }

        false
    }
}
