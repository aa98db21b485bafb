//! Human-readable table dumps for debugging

use super::Automaton;
use std::fmt;

/// Failure table rendered as an `index | value` grid
pub struct FailureDump<'a> {
    automaton: &'a Automaton,
}

/// Output table rendered as an `index | words` grid
pub struct OutputDump<'a> {
    automaton: &'a Automaton,
}

impl Automaton {
    /// Failure links of every non-root state
    pub fn dump_failure(&self) -> FailureDump<'_> {
        FailureDump { automaton: self }
    }

    /// Merged outputs of every state that reports a pattern
    pub fn dump_output(&self) -> OutputDump<'_> {
        OutputDump { automaton: self }
    }
}

impl fmt::Display for FailureDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+-------+-------+")?;
        writeln!(f, "|{:>7}|{:>7}|", "index", "value")?;
        writeln!(f, "+-------+-------+")?;
        for state in self.automaton.states().filter(|s| !s.is_root()) {
            writeln!(f, "|{:>7}|{:>7}|", state, self.automaton.failure(state))?;
        }
        write!(f, "+-------+-------+")
    }
}

impl fmt::Display for OutputDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+-------+------------")?;
        writeln!(f, "|{:>7}| {}", "index", "value")?;
        writeln!(f, "+-------+------------")?;
        for (state, patterns) in self.automaton.output.iter() {
            let words: Vec<String> = patterns
                .iter()
                .map(|&id| self.automaton.pattern(id).iter().collect())
                .collect();
            writeln!(f, "|{:>7}| {}", state, words.join(" "))?;
        }
        write!(f, "+-------+------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_dump_lists_non_root_states() {
        let automaton = Automaton::from_words(["he", "she"]).unwrap();
        let dump = automaton.dump_failure().to_string();
        // header (3 lines) + 5 non-root states + footer
        assert_eq!(dump.lines().count(), 3 + 5 + 1);
        assert!(dump.contains("|  index|  value|"));
    }

    #[test]
    fn test_output_dump_shows_merged_words() {
        let automaton = Automaton::from_words(["he", "she"]).unwrap();
        let dump = automaton.dump_output().to_string();
        assert!(dump.contains("| she he"));
        assert!(dump.lines().any(|line| line.ends_with("| he")));
    }
}
