//! Input history backing single-step undo
//!
//! Records the characters typed into the current operand since the last
//! reset point (operator chosen, result computed, or clear). Undo pops the
//! newest entry and rebuilds the operand from what remains.

use serde::{Deserialize, Serialize};

/// Characters (digits and decimal points) typed into the current operand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputHistory {
    entries: Vec<char>,
}

impl InputHistory {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a typed character
    pub fn push(&mut self, input: char) {
        self.entries.push(input);
    }

    /// Removes and returns the most recent entry
    pub fn pop(&mut self) -> Option<char> {
        self.entries.pop()
    }

    /// Forgets every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been typed since the last reset point
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().copied()
    }

    /// Concatenation of all entries, oldest first
    #[must_use]
    pub fn joined(&self) -> String {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_new_is_empty() {
        let history = InputHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.joined(), "");
    }

    #[test]
    fn test_history_push_and_join() {
        let mut history = InputHistory::new();
        history.push('1');
        history.push('.');
        history.push('5');
        assert_eq!(history.len(), 3);
        assert_eq!(history.joined(), "1.5");
    }

    #[test]
    fn test_history_pop_newest_first() {
        let mut history = InputHistory::new();
        history.push('4');
        history.push('2');
        assert_eq!(history.pop(), Some('2'));
        assert_eq!(history.pop(), Some('4'));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_history_clear() {
        let mut history = InputHistory::new();
        history.push('9');
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_iter_oldest_first() {
        let mut history = InputHistory::new();
        for c in ['3', '1', '4'] {
            history.push(c);
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!['3', '1', '4']);
    }

    #[test]
    fn test_history_serializes_as_list() {
        let mut history = InputHistory::new();
        history.push('7');
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"entries":["7"]}"#);
    }
}
