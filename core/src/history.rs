//! Input history with a navigable cursor.
//!
//! Submitted lines are stored most-recent-first, capped, with duplicates
//! kept. The cursor is either "not browsing" (`None`) or an index into the
//! entries; it resets on every new submission. Navigating past the newest
//! entry leaves browsing mode and yields an empty string so the caller can
//! clear the input field.

/// Maximum number of remembered submissions.
pub const MAX_ENTRIES: usize = 100;


/// Previously submitted command lines, newest first.
#[derive(Debug)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Record a submitted line and stop browsing.
    ///
    /// Callers must reject blank input before recording; this method does
    /// not trim or filter.
    pub fn record(&mut self, raw: &str) {
        self.entries.insert(0, raw.to_string());
        self.entries.truncate(MAX_ENTRIES);
        self.cursor = None;
    }

    /// Step one entry toward the oldest and return it.
    ///
    /// Starts browsing at the newest entry; clamps at the oldest (repeated
    /// calls keep returning it). Returns `None` only when the history is
    /// empty.
    pub fn older(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(pos) => (pos + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        Some(self.entries[next].clone())
    }

    /// Step one entry toward the newest and return it.
    ///
    /// Stepping past the newest entry leaves browsing mode and returns an
    /// empty string. Returns `None` when not browsing.
    pub fn newer(&mut self) -> Option<String> {
        let pos = self.cursor?;
        if pos == 0 {
            self.cursor = None;
            return Some(String::new());
        }
        self.cursor = Some(pos - 1);
        Some(self.entries[pos - 1].clone())
    }

    /// Number of remembered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a navigation is in progress.
    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
