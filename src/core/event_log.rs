//! Bounded in-memory event log of engine actions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::util::clock::clock_label;

/// One human-readable action record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Local wall-clock time, `HH:MM:SS`.
    pub time: String,
    /// What happened.
    pub message: String,
}

/// Ring buffer of [`LogEntry`]; the oldest entry is dropped once full.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl EventLog {
    /// Create a log holding at most `max_entries` entries.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(1024)),
            max_entries,
        }
    }

    /// Append a message stamped with the current clock time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.push(LogEntry {
            time: clock_label(),
            message: message.into(),
        });
    }

    /// Append a pre-built entry.
    pub fn push(&mut self, entry: LogEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Up to `limit` most recent entries, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
