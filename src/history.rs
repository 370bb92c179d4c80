//! Bounded command history with sequential recall
//!
//! The front end records each submitted line here and walks back and forth
//! through it with [`CommandHistory::get_previous`] and
//! [`CommandHistory::get_next`]. Neither operation fails: at the boundaries
//! they degrade to an empty string.

use std::collections::VecDeque;

/// Default number of entries kept before the oldest are evicted
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Bounded history of submitted commands
#[derive(Debug, Clone)]
pub struct CommandHistory {
    /// Entries, oldest first
    history: VecDeque<String>,
    /// Maximum history size
    max_size: usize,
    /// Recall cursor, `None` when nothing is selected
    position: Option<usize>,
}

impl CommandHistory {
    /// Create a history holding at most `max_size` entries
    pub fn new(max_size: usize) -> Self {
        Self {
            history: VecDeque::new(),
            max_size,
            position: None,
        }
    }

    /// Append a command
    ///
    /// Empty commands and repeats of the most recent entry are ignored.
    pub fn add(&mut self, command: &str) {
        if command.is_empty() {
            return;
        }
        if self.history.back().is_some_and(|last| last == command) {
            return;
        }

        self.history.push_back(command.to_string());

        // Trim to max size
        while self.history.len() > self.max_size {
            self.history.pop_front();
        }

        self.reset_position();
    }

    /// Step back to the previous entry, stopping at the oldest one
    pub fn get_previous(&mut self) -> String {
        if self.history.is_empty() {
            return String::new();
        }

        let index = match self.position {
            None => self.history.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.position = Some(index);
        self.history[index].clone()
    }

    /// Step forward to the next entry
    ///
    /// Moving past the newest entry clears the selection and yields an empty
    /// string, returning the caller to a blank input line.
    pub fn get_next(&mut self) -> String {
        let Some(index) = self.position else {
            return String::new();
        };
        if self.history.is_empty() {
            return String::new();
        }

        if index + 1 < self.history.len() {
            self.position = Some(index + 1);
            self.history[index + 1].clone()
        } else {
            self.position = None;
            String::new()
        }
    }

    /// Clear the recall cursor
    pub fn reset_position(&mut self) {
        self.position = None;
    }

    /// Entry at `index` (oldest is 0)
    pub fn get(&self, index: usize) -> Option<&str> {
        self.history.get(index).map(String::as_str)
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &VecDeque<String> {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
