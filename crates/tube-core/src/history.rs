//! Undo/Redo history management
//!
//! A linear list of assembly snapshots with a cursor. Entries after the
//! cursor are the redo-able future and are dropped on the next `record`.

use crate::assembly::Assembly;

/// Default maximum number of history entries
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A snapshot of the assembly for undo/redo
///
/// Owns its own copy of every segment; later edits to the live assembly
/// never show up here.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Assembly state
    pub assembly: Assembly,
    /// Description of the action that led to this state
    pub description: String,
}

/// Undo/redo history manager
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    /// Index of the entry matching the live state; `None` when empty
    cursor: Option<usize>,
    /// Maximum number of history entries
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create a new history manager with the specified maximum entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Record the current state, discarding anything after the cursor
    pub fn record(&mut self, assembly: &Assembly, description: &str) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);

        self.entries.push(HistoryEntry {
            assembly: assembly.clone(),
            description: description.to_string(),
        });

        // Trim history if it exceeds the maximum
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }

        self.cursor = Some(self.entries.len() - 1);
        tracing::debug!(
            "History: recorded '{}' ({} entries)",
            description,
            self.entries.len()
        );
    }

    /// Step back, returning the entry that is now current
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.entries.get(c - 1)
            }
            _ => None,
        }
    }

    /// Step forward, returning the entry that is now current
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                self.entries.get(c + 1)
            }
            _ => None,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// Description of the step `undo` would revert
    pub fn undo_description(&self) -> Option<&str> {
        if self.can_undo() {
            self.current().map(|e| e.description.as_str())
        } else {
            None
        }
    }

    /// Description of the step `redo` would reapply
    pub fn redo_description(&self) -> Option<&str> {
        let next = self.cursor? + 1;
        self.entries.get(next).map(|e| e.description.as_str())
    }

    /// Entry matching the live state
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor?)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
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

    /// Clear all history
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
