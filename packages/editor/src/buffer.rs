//! # Edit Buffer
//!
//! The controller's copy of the text surface: the full text plus a caret.
//!
//! Offsets are byte offsets into the text and must sit on character
//! boundaries. The buffer also knows how to find the sentence being typed,
//! which is the text between the last sentence break before the caret and
//! the caret itself.

use crate::EditorError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Characters that end the sentence being typed
const SENTENCE_BREAKS: [char; 4] = ['.', '?', '!', '\n'];

/// A full replacement of the text surface's contents and caret
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub text: String,
    pub caret: usize,
}

/// Check that `caret` can be used as an offset into `text`
pub fn validate_caret(text: &str, caret: usize) -> Result<(), EditorError> {
    if caret > text.len() {
        return Err(EditorError::CaretOutOfBounds {
            caret,
            len: text.len(),
        });
    }

    if !text.is_char_boundary(caret) {
        return Err(EditorError::CaretNotOnCharBoundary { caret });
    }

    Ok(())
}

/// Locate the sentence being typed before `caret`.
///
/// The span starts after the closest `.`, `?`, `!` or line break before the
/// caret (or at the start of the text), skips leading whitespace, and ends
/// at the caret. Spans of one character or less are too short to tell what
/// is being typed and yield `None`.
pub fn current_sentence_bounds(text: &str, caret: usize) -> Option<Range<usize>> {
    let before = text.get(..caret)?;

    // Every break character is one byte long.
    let line_start = before.rfind(SENTENCE_BREAKS).map_or(0, |pos| pos + 1);
    let sentence = &before[line_start..];
    let start = line_start + (sentence.len() - sentence.trim_start().len());

    if before[start..].chars().count() <= 1 {
        return None;
    }

    Some(start..caret)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    caret: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(text: impl Into<String>, caret: usize) -> Result<Self, EditorError> {
        let text = text.into();
        validate_caret(&text, caret)?;
        Ok(Self { text, caret })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Replace text and caret; nothing changes when the caret is invalid
    pub fn set(&mut self, text: String, caret: usize) -> Result<(), EditorError> {
        validate_caret(&text, caret)?;
        self.text = text;
        self.caret = caret;
        Ok(())
    }

    /// True if the buffer already holds exactly this text and caret
    pub fn matches(&self, text: &str, caret: usize) -> bool {
        self.caret == caret && self.text == text
    }

    /// Replace `range` with `insert` and put the caret right after it
    pub fn replace_range(&mut self, range: Range<usize>, insert: &str) {
        let caret = range.start + insert.len();
        self.text.replace_range(range, insert);
        self.caret = caret;
    }

    /// Insert at the caret and move the caret past the insertion
    pub fn insert_at_caret(&mut self, insert: &str) {
        self.replace_range(self.caret..self.caret, insert);
    }

    pub fn snapshot(&self) -> TextEdit {
        TextEdit {
            text: self.text.clone(),
            caret: self.caret,
        }
    }

    pub fn restore(&mut self, snapshot: TextEdit) {
        self.text = snapshot.text;
        self.caret = snapshot.caret;
    }

    pub fn current_sentence_bounds(&self) -> Option<Range<usize>> {
        current_sentence_bounds(&self.text, self.caret)
    }
}
