//! Build errors

use acmatch_trie::TrieError;
use thiserror::Error;

/// Errors raised while building an [`Automaton`](crate::Automaton)
///
/// Searching never fails; only construction does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No patterns were supplied
    #[error("empty pattern set: at least one keyword is required")]
    EmptyPatternSet,

    /// The trie collaborator could not build its table
    #[error("trie build failed: {0}")]
    Trie(#[from] TrieError),
}

/// Result type for build operations
pub type Result<T> = std::result::Result<T, BuildError>;
