//! Aho–Corasick multi-pattern matching over Unicode code points
//!
//! This crate builds a deterministic automaton from a fixed keyword set and
//! scans text once to report every occurrence of every keyword, overlapping
//! occurrences included. Three searches are offered:
//!
//! - **strict**: contiguous occurrences only;
//! - **gap-tolerant**: additionally matches keywords whose symbols are
//!   interrupted by up to `gap_budget` consecutive noise symbols, such as
//!   digits or punctuation inserted inside a word;
//! - **exact**: whether an entire input equals one keyword.
//!
//! # Architecture
//!
//! - `acmatch-trie` supplies the double-array transition table
//! - [`automaton`]: failure links, merged output sets and the transition
//!   function `g`
//! - [`search`]: the strict and gap-tolerant scanners
//!
//! The built [`Automaton`] is immutable and `Sync`, so one instance can serve
//! any number of concurrent searches.
//!
//! # Example
//!
//! ```rust
//! use acmatch_core::{Automaton, SearchOptions};
//!
//! let automaton = Automaton::from_words(["he", "she", "his", "hers"]).unwrap();
//!
//! let terms = automaton.search_str("ushers", SearchOptions::strict());
//! let found: Vec<(usize, String)> = terms.iter().map(|t| (t.pos, t.word_string())).collect();
//! assert_eq!(
//!     found,
//!     vec![(1, "she".into()), (2, "he".into()), (2, "hers".into())]
//! );
//!
//! // Tolerate one noise symbol between keyword symbols
//! let terms = automaton.search_str("h1is", SearchOptions::default().with_gap_budget(1));
//! assert_eq!(terms.len(), 1);
//! assert_eq!((terms[0].pos, terms[0].end), (0, 4));
//! ```

pub mod automaton;
pub mod dictionary;
pub mod error;
mod exact;
pub mod search;
pub mod term;

pub use acmatch_trie::{PatternId, State, TrieError};
pub use automaton::{Automaton, AutomatonBuilder, Transition};
pub use dictionary::{load_dictionary, load_dictionary_file};
pub use error::{BuildError, Result};
pub use search::SearchOptions;
pub use term::Term;
