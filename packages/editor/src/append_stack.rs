//! # Append Stack
//!
//! Undo history for paste-forward.
//!
//! ## Design
//!
//! - Every forward append records the buffer as it was before the paste
//! - Undo pops the most recent entry and restores that buffer exactly
//! - Each entry remembers which sentence was pasted, so undo can put the
//!   paste-forward bookmark back on it
//! - There is no redo: advancing again re-pastes from the bookmark

use crate::buffer::TextEdit;
use autocompaste_engine::SentenceCursor;

/// One forward append that has not been undone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendEntry {
    /// Text and caret before the paste
    pub prior: TextEdit,

    /// The sentence that was pasted
    pub pasted: SentenceCursor,
}

#[derive(Debug, Clone, Default)]
pub struct AppendStack {
    /// Most recent append last
    entries: Vec<AppendEntry>,
}

impl AppendStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: AppendEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<AppendEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
