//! Symbol to code mapping
//!
//! Code points are remapped to small dense codes before they index the
//! double array. Frequent symbols get the smallest codes, which keeps sibling
//! slots close together and the arrays compact.

use crate::Code;
use std::collections::HashMap;

/// Maps `char` to [`Code`]; a zero entry means the symbol never occurs in
/// any pattern
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeMapper {
    table: Vec<Code>,
    alphabet_size: usize,
}

impl CodeMapper {
    /// Build a mapper from every symbol of every pattern
    pub fn new<P: AsRef<[char]>>(patterns: &[P]) -> Self {
        let mut freqs: HashMap<char, usize> = HashMap::new();
        for pattern in patterns {
            for &c in pattern.as_ref() {
                *freqs.entry(c).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(char, usize)> = freqs.into_iter().collect();
        // Highest frequency first, code point breaks ties so builds are reproducible
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let table_len = ranked.iter().map(|&(c, _)| c as usize + 1).max().unwrap_or(0);
        let mut table = vec![0; table_len];
        for (rank, &(c, _)) in ranked.iter().enumerate() {
            table[c as usize] = rank as Code + 1;
        }

        Self {
            table,
            alphabet_size: ranked.len(),
        }
    }

    /// Code of `c`, or `None` if no pattern contains it
    #[inline]
    pub fn get(&self, c: char) -> Option<Code> {
        match self.table.get(c as usize) {
            Some(&code) if code != 0 => Some(code),
            _ => None,
        }
    }

    /// Number of distinct symbols across all patterns
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Vec<char>> {
        list.iter().map(|w| w.chars().collect()).collect()
    }

    #[test]
    fn test_frequent_symbols_get_small_codes() {
        let mapper = CodeMapper::new(&words(&["aab", "ac"]));
        assert_eq!(mapper.get('a'), Some(1));
        assert_eq!(mapper.get('b'), Some(2));
        assert_eq!(mapper.get('c'), Some(3));
        assert_eq!(mapper.alphabet_size(), 3);
    }

    #[test]
    fn test_unknown_symbols() {
        let mapper = CodeMapper::new(&words(&["阿拉伯"]));
        assert!(mapper.get('阿').is_some());
        assert_eq!(mapper.get('x'), None);
        assert_eq!(mapper.get('\u{10FFFF}'), None);
    }

    #[test]
    fn test_empty_mapper() {
        let mapper = CodeMapper::new::<Vec<char>>(&[]);
        assert_eq!(mapper.get('a'), None);
        assert_eq!(mapper.alphabet_size(), 0);
    }
}
