//! # Completion Controller
//!
//! The interaction state machine behind an AutoComPaste text field.
//!
//! ```text
//!              text change (matches)
//!   ┌──────┐ ───────────────────────▶ ┌────────────┐
//!   │ Idle │                          │ Suggesting │
//!   └──────┘ ◀─────────────────────── └────────────┘
//!      ▲      text change (no match)     │      │
//!      │      escape                     │      │ accept
//!      │                                 │      ▼
//!      │    retreat (history empty)   ┌───────────────┐
//!      └───────────────────────────── │ PasteForward  │ ◀─┐ advance /
//!                                     └───────────────┘ ──┘ retreat
//! ```
//!
//! Every operation borrows the [`Index`] it reads from instead of owning it,
//! so several controllers can share one index. Lookups that miss (no
//! suggestion to accept, no next sentence, no history to undo) leave the
//! controller in a well-defined state and return `None`.

use crate::append_stack::{AppendEntry, AppendStack};
use crate::buffer::{EditBuffer, TextEdit};
use crate::config::{AppendHistoryPolicy, EditorConfig};
use crate::session::SuggestionSession;
use crate::EditorError;
use autocompaste_engine::{Index, SentenceRef, Suggestion};
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControllerState {
    /// No list shown and nothing to paste forward
    Idle,

    /// The suggestion list is shown
    Suggesting,

    /// A next-sentence bookmark is armed
    PasteForward,
}

/// Keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    BackTab,
    Enter,
    Escape,
}

/// Result of [`CompletionController::handle_key`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key was used by the controller and should not reach the text field
    pub consumed: bool,

    /// Edit to apply to the text surface
    pub edit: Option<TextEdit>,
}

impl KeyOutcome {
    fn handled(edit: Option<TextEdit>) -> Self {
        Self {
            consumed: true,
            edit,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompletionController {
    config: EditorConfig,

    /// Mirror of the text surface
    buffer: EditBuffer,

    session: SuggestionSession,

    /// Span of the sentence being typed, known while suggesting
    current_span: Option<Range<usize>>,

    /// Sentence the next advance will paste
    bookmark: Option<SentenceRef>,

    appends: AppendStack,
}

impl CompletionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;

        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn state(&self) -> ControllerState {
        if self.session.is_shown() {
            ControllerState::Suggesting
        } else if self.bookmark.is_some() {
            ControllerState::PasteForward
        } else {
            ControllerState::Idle
        }
    }

    /// React to the text surface changing.
    ///
    /// Finds the sentence being typed and queries the index with it. A call
    /// that repeats the text and caret the controller itself produced last
    /// is an echo of its own edit and changes nothing.
    pub fn on_text_changed(
        &mut self,
        index: &Index,
        text: impl Into<String>,
        caret: usize,
    ) -> Result<ControllerState, EditorError> {
        let text = text.into();
        if self.buffer.matches(&text, caret) {
            return Ok(self.state());
        }

        self.buffer.set(text, caret)?;

        if self.config.append_history == AppendHistoryPolicy::ClearOnEdit
            && !self.appends.is_empty()
        {
            tracing::debug!("Edit dropped {} appends from history", self.appends.len());
            self.appends.clear();
        }

        match self.buffer.current_sentence_bounds() {
            Some(span) => {
                let query = self.buffer.text()[span.clone()].trim();
                let found = self.session.set_query(index, query).len();
                tracing::debug!("Query {:?} produced {} suggestions", query, found);
                self.current_span = (found > 0).then_some(span);
            }
            None => {
                self.session.clear();
                self.current_span = None;
            }
        }

        Ok(self.state())
    }

    /// Replace the sentence being typed with the focused suggestion.
    ///
    /// Arms the bookmark on the sentence that follows the accepted one.
    pub fn accept(&mut self, index: &Index) -> Option<TextEdit> {
        if !self.session.is_shown() {
            return None;
        }

        let span = self.current_span.take()?;
        let suggestion = self.session.accept_focused()?.clone();

        self.buffer
            .replace_range(span, &format!("{} ", suggestion.sentence));
        self.session.clear();
        self.bookmark = index.resolve(&suggestion.cursor().next());

        tracing::debug!(
            "Accepted {}#{}, next sentence {}",
            suggestion.document_id,
            suggestion.sentence_index,
            if self.bookmark.is_some() { "armed" } else { "unavailable" }
        );

        Some(self.buffer.snapshot())
    }

    /// Paste the bookmarked sentence at the caret and move the bookmark on
    pub fn advance(&mut self, index: &Index) -> Option<TextEdit> {
        if self.session.is_shown() {
            return None;
        }

        let bookmark = self.bookmark.take()?;
        let pasted = bookmark.cursor();

        self.appends.push(AppendEntry {
            prior: self.buffer.snapshot(),
            pasted: pasted.clone(),
        });
        self.buffer
            .insert_at_caret(&format!("{} ", bookmark.sentence));
        self.bookmark = index.resolve(&pasted.next());

        tracing::debug!(
            "Appended {}#{} ({} in history)",
            pasted.document_id,
            pasted.sentence_index,
            self.appends.len()
        );

        Some(self.buffer.snapshot())
    }

    /// Undo the most recent append.
    ///
    /// With no append left to undo, the bookmark is dropped instead.
    pub fn retreat(&mut self, index: &Index) -> Option<TextEdit> {
        if self.session.is_shown() {
            return None;
        }

        let Some(entry) = self.appends.pop() else {
            if self.bookmark.take().is_some() {
                tracing::debug!("Retreat with empty history cleared the bookmark");
            }
            return None;
        };

        self.buffer.restore(entry.prior);
        // Step back from the armed bookmark; after running off the end of a
        // document there is none, and the popped paste is the one to re-arm.
        let target = match &self.bookmark {
            Some(bookmark) => bookmark.cursor().prev(),
            None => Some(entry.pasted.clone()),
        };
        self.bookmark = target.and_then(|cursor| index.resolve(&cursor));

        tracing::debug!(
            "Undid append of {}#{} ({} left)",
            entry.pasted.document_id,
            entry.pasted.sentence_index,
            self.appends.len()
        );

        Some(self.buffer.snapshot())
    }

    /// Hide the suggestion list; the bookmark is left alone
    pub fn escape(&mut self) {
        if self.session.is_shown() {
            self.session.hide();
            self.current_span = None;
        }
    }

    /// Move focus within the shown list
    pub fn focus_delta(&mut self, delta: isize) -> Option<usize> {
        self.session
            .is_shown()
            .then(|| self.session.focus_delta(delta))
    }

    /// Focus a list position directly (pointer hover)
    pub fn focus(&mut self, position: usize) -> Option<usize> {
        self.session
            .is_shown()
            .then(|| self.session.focus(position))
    }

    /// Map a key press onto the state machine
    pub fn handle_key(&mut self, index: &Index, key: Key) -> KeyOutcome {
        if self.session.is_shown() {
            return match key {
                Key::Escape => {
                    self.escape();
                    KeyOutcome::ignored()
                }
                Key::Enter => KeyOutcome::handled(self.accept(index)),
                Key::Down | Key::Left | Key::Tab => {
                    self.focus_delta(1);
                    KeyOutcome::handled(None)
                }
                Key::Up | Key::Right | Key::BackTab => {
                    self.focus_delta(-1);
                    KeyOutcome::handled(None)
                }
            };
        }

        match key {
            Key::Right if self.bookmark.is_some() => KeyOutcome::handled(self.advance(index)),
            Key::Left if !self.appends.is_empty() => KeyOutcome::handled(self.retreat(index)),
            Key::Left => {
                self.retreat(index);
                KeyOutcome::ignored()
            }
            _ => KeyOutcome::ignored(),
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn is_list_shown(&self) -> bool {
        self.session.is_shown()
    }

    /// Suggestions currently shown (empty while hidden)
    pub fn suggestions(&self) -> &[Suggestion] {
        if self.session.is_shown() {
            self.session.suggestions()
        } else {
            &[]
        }
    }

    pub fn focused(&self) -> usize {
        self.session.focused()
    }

    pub fn session(&self) -> &SuggestionSession {
        &self.session
    }

    /// The sentence being typed, while suggestions are shown
    pub fn current_sentence(&self) -> Option<&str> {
        self.current_span
            .as_ref()
            .map(|span| &self.buffer.text()[span.clone()])
    }

    pub fn bookmark(&self) -> Option<&SentenceRef> {
        self.bookmark.as_ref()
    }

    /// Number of appends that can still be undone
    pub fn append_depth(&self) -> usize {
        self.appends.len()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}
