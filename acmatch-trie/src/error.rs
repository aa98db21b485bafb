//! Trie construction errors

use core::fmt;

/// Errors raised while building the double-array table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// A pattern with no symbols was supplied
    EmptyPattern {
        /// Position of the offending pattern in the input list
        index: usize,
    },
    /// The table would grow past the configured slot limit
    CapacityExceeded {
        /// The slot limit that was hit
        limit: usize,
    },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::EmptyPattern { index } => write!(f, "pattern {index} is empty"),
            TrieError::CapacityExceeded { limit } => {
                write!(f, "double-array capacity of {limit} slots exceeded")
            }
        }
    }
}

impl std::error::Error for TrieError {}

/// Result type for trie operations
pub type Result<T> = core::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TrieError::EmptyPattern { index: 3 }.to_string(),
            "pattern 3 is empty"
        );
        assert_eq!(
            TrieError::CapacityExceeded { limit: 16 }.to_string(),
            "double-array capacity of 16 slots exceeded"
        );
    }
}
