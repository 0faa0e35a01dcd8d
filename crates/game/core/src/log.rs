//! Bounded battle narration.
//!
//! The log is a pure recorder for the presentation layer; nothing in the
//! engine reads it back.

use std::collections::VecDeque;
use std::fmt;

/// One narrated event, tagged with the turn number at the time of append.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub turn: u32,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn {}: {}", self.turn, self.message)
    }
}

/// Append-only ring of the most recent entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl BattleLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one on overflow.
    pub fn push(&mut self, turn: u32, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            turn,
            message: message.into(),
        });
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The last `n` entries, oldest first.
    pub fn last(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    /// Display lines (`Turn N: message`) from oldest to newest.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_entry_on_overflow() {
        let mut log = BattleLog::with_capacity(10);
        for i in 0..12 {
            log.push(1, format!("event {i}"));
        }
        assert_eq!(log.len(), 10);
        assert_eq!(log.iter().next().map(|e| e.message.as_str()), Some("event 2"));
        assert_eq!(log.iter().last().map(|e| e.message.as_str()), Some("event 11"));
    }

    #[test]
    fn last_returns_newest_entries_in_order() {
        let mut log = BattleLog::with_capacity(10);
        log.push(1, "a");
        log.push(2, "b");
        log.push(3, "c");
        let tail: Vec<String> = log.last(2).map(ToString::to_string).collect();
        assert_eq!(tail, vec!["Turn 2: b", "Turn 3: c"]);
        assert_eq!(log.last(50).count(), 3);
    }
}
