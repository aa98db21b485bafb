//! The built automaton
//!
//! An [`Automaton`] bundles the double-array trie with the tables computed
//! on top of it: the failure function, the depth of every state and the
//! merged output sets. Everything is computed once in [`Automaton::build`]
//! and never mutated afterwards.

mod dump;
mod failure;
mod goto;
mod output;

pub use dump::{FailureDump, OutputDump};
pub use goto::Transition;
pub use output::OutputIndex;

use crate::error::{BuildError, Result};
use acmatch_trie::{DoubleArrayTrie, PatternId, State, TrieBuilder};
use failure::FailureTableBuilder;

/// Immutable Aho–Corasick automaton over `char` symbols
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Automaton {
    trie: DoubleArrayTrie,
    failure: Vec<State>,
    depth: Vec<u32>,
    output: OutputIndex,
    patterns: Vec<Vec<char>>,
}

impl Automaton {
    /// Build an automaton from an ordered, non-empty pattern list
    ///
    /// Fails with [`BuildError::EmptyPatternSet`] before any construction
    /// work if `patterns` is empty, and with [`BuildError::Trie`] if the
    /// trie cannot be built.
    pub fn build<P: AsRef<[char]>>(patterns: &[P]) -> Result<Self> {
        Self::builder().build(patterns)
    }

    /// Build from string keywords
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<Vec<char>> = words
            .into_iter()
            .map(|w| w.as_ref().chars().collect())
            .collect();
        Self::build(&patterns)
    }

    /// Builder exposing trie capacity settings
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::default()
    }

    /// Failure link of `state`; the root links to itself
    ///
    /// A state this automaton does not own links to the root.
    #[inline]
    pub fn failure(&self, state: State) -> State {
        self.failure.get(state.index()).copied().unwrap_or(State::ROOT)
    }

    /// Path length from the root to `state`, 0 for a state this automaton
    /// does not own
    #[inline]
    pub fn depth(&self, state: State) -> usize {
        self.depth.get(state.index()).map_or(0, |&depth| depth as usize)
    }

    /// Patterns recognized on entering `state`, own terminations first
    #[inline]
    pub fn output(&self, state: State) -> &[PatternId] {
        self.output.get(state)
    }

    /// The keyword with the given id
    #[inline]
    pub fn pattern(&self, id: PatternId) -> &[char] {
        &self.patterns[id]
    }

    /// All keywords in build order
    pub fn patterns(&self) -> &[Vec<char>] {
        &self.patterns
    }

    /// Number of keywords supplied at build time, duplicates included
    pub fn num_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// Number of trie states, the root included
    pub fn num_states(&self) -> usize {
        self.trie.num_states()
    }

    /// Every live state, the root first
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        (0..self.trie.num_slots())
            .filter(|&slot| self.trie.owner(slot).is_some())
            .map(|slot| State::new(slot as u32))
    }

    /// The underlying transition table
    pub fn trie(&self) -> &DoubleArrayTrie {
        &self.trie
    }
}

/// Builder for [`Automaton`]
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    trie: TrieBuilder,
}

impl AutomatonBuilder {
    /// Cap the double-array length of the trie
    pub fn max_slots(mut self, limit: usize) -> Self {
        self.trie = self.trie.max_slots(limit);
        self
    }

    /// Build the automaton
    pub fn build<P: AsRef<[char]>>(&self, patterns: &[P]) -> Result<Automaton> {
        if patterns.is_empty() {
            return Err(BuildError::EmptyPatternSet);
        }

        let (trie, layout) = self.trie.build(patterns)?;
        let tables = FailureTableBuilder::new(&trie, &layout).build();

        log::debug!(
            "built automaton: {} patterns, {} states, {} slots, alphabet of {}",
            patterns.len(),
            trie.num_states(),
            trie.num_slots(),
            trie.alphabet_size()
        );

        Ok(Automaton {
            trie,
            failure: tables.failure,
            depth: tables.depth,
            output: tables.output,
            patterns: patterns.iter().map(|p| p.as_ref().to_vec()).collect(),
        })
    }
}
