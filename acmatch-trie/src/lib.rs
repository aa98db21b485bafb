//! Double-array trie over Unicode code points
//!
//! This crate provides the transition table the acmatch automaton is built
//! on. Patterns are stored in a pointer-free `base`/`check` layout where a
//! state is a plain index into the arrays and a child of state `s` on code
//! `c` lives at slot `base[s] + c` if `check[base[s] + c] == s`.
//!
//! Alongside the table the builder returns a [`TrieLayout`] listing the
//! children of every state in breadth-first order, which is what failure
//! link construction walks.
//!
//! # Example
//!
//! ```rust
//! use acmatch_trie::{State, TrieBuilder};
//!
//! let patterns: Vec<Vec<char>> = ["he", "she"].iter().map(|w| w.chars().collect()).collect();
//! let (trie, layout) = TrieBuilder::new().build(&patterns).unwrap();
//!
//! assert_eq!(trie.exact_match(&['s', 'h', 'e']), Some(1));
//! assert_eq!(trie.exact_match(&['s', 'h']), None);
//! assert_eq!(layout.children(State::ROOT).len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod layout;
mod mapper;
pub mod trie;

pub use builder::TrieBuilder;
pub use error::{Result, TrieError};
pub use layout::TrieLayout;
pub use mapper::CodeMapper;
pub use trie::DoubleArrayTrie;

/// Dense symbol code assigned by the [`CodeMapper`]. Codes start at 1.
pub type Code = u32;

/// Index of a pattern in the list handed to the builder
pub type PatternId = usize;

/// Largest number of slots a table may grow to
pub const MAX_SLOTS: usize = u32::MAX as usize;

/// Marker for a `check` slot that no state owns
pub(crate) const EMPTY_SLOT: u32 = u32::MAX;

/// Trie state: an index into the double-array tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct State(u32);

impl State {
    /// The root state, reached by the empty prefix
    pub const ROOT: State = State(0);

    /// Wrap a raw slot index
    pub const fn new(index: u32) -> Self {
        State(index)
    }

    /// Slot index of this state
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the root state
    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
