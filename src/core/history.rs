//! Visited-state history.
//!
//! Records every state the machine enters, in chronological order. The
//! history is what undo and redo navigate; navigating never changes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single visited state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state that was entered
    pub state: String,
    /// When the state was entered
    pub entered_at: DateTime<Utc>,
}

/// Ordered log of visited states.
///
/// Index lookups compare state names only, so the same state entered
/// twice occupies two positions.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::History;
///
/// let mut history = History::new();
/// history.record("green");
/// history.record("yellow");
/// history.record("green");
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.first_index_of("green"), Some(0));
/// assert_eq!(history.last_index_of("green"), Some(2));
/// assert_eq!(history.get(1), Some("yellow"));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history whose only entry is `state`.
    pub fn starting_at(state: impl Into<String>) -> Self {
        let mut history = Self::new();
        history.record(state);
        history
    }

    /// Append `state`, stamped with the current time.
    pub fn record(&mut self, state: impl Into<String>) {
        self.entries.push(HistoryEntry {
            state: state.into(),
            entered_at: Utc::now(),
        });
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// State name at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.state.as_str())
    }

    /// Position of the earliest entry for `state`.
    pub fn first_index_of(&self, state: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.state == state)
    }

    /// Position of the latest entry for `state`.
    pub fn last_index_of(&self, state: &str) -> Option<usize> {
        self.entries.iter().rposition(|e| e.state == state)
    }

    /// Visited state names in order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.state.as_str())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Time elapsed between the first and the last entry.
    ///
    /// Returns `None` for an empty history, or if the clock went backwards
    /// between the two entries.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.entered_at
            .signed_duration_since(first.entered_at)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = History::new();

        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.duration().is_none());
        assert_eq!(history.get(0), None);
    }

    #[test]
    fn starting_at_holds_one_entry() {
        let history = History::starting_at("idle");

        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Some("idle"));
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = History::starting_at("a");
        history.record("b");
        history.record("c");

        assert_eq!(history.states().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn index_lookups_distinguish_first_and_last() {
        let mut history = History::starting_at("a");
        history.record("b");
        history.record("a");
        history.record("c");

        assert_eq!(history.first_index_of("a"), Some(0));
        assert_eq!(history.last_index_of("a"), Some(2));
        assert_eq!(history.first_index_of("c"), Some(3));
        assert_eq!(history.first_index_of("z"), None);
        assert_eq!(history.last_index_of("z"), None);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = History::starting_at("a");
        history.record("b");
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.first_index_of("a"), None);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut history = History::starting_at("a");
        std::thread::sleep(Duration::from_millis(10));
        history.record("b");

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn single_entry_has_zero_duration() {
        let history = History::starting_at("a");

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = History::starting_at("a");
        history.record("b");

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(
            history.states().collect::<Vec<_>>(),
            deserialized.states().collect::<Vec<_>>()
        );
    }
}
