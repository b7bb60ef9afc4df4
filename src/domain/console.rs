// Console log domain model
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of lines the console keeps.
pub const LOG_CAPACITY: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub accent: bool,
}

impl LogEntry {
    pub fn new(timestamp: impl Into<String>, message: impl Into<String>, accent: bool) -> Self {
        Self {
            timestamp: timestamp.into(),
            message: message.into(),
            accent,
        }
    }
}

/// Rolling console buffer, newest last.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 2),
            capacity,
        }
    }

    pub fn with_entries(capacity: usize, entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut buffer = Self::new(capacity);
        buffer.extend(entries);
        buffer
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.extend([entry]);
    }

    /// Appends all entries, then trims from the front.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        self.entries.extend(entries);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}
