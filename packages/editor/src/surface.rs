//! # Surfaces
//!
//! Boundaries between the controller and the outside world.
//!
//! A [`TextSurface`] is the editable text field: it reports its text and
//! caret, and accepts replacements. A [`DisplaySurface`] renders the
//! suggestion list wherever it likes; the controller only says what to show
//! and when to hide it.
//!
//! [`Editor`] wires a controller to one surface of each kind and keeps them
//! in sync after every event.

use crate::buffer::{validate_caret, TextEdit};
use crate::config::{EditorConfig, ListGeometry};
use crate::controller::{CompletionController, Key, KeyOutcome};
use crate::EditorError;
use autocompaste_engine::{Index, Suggestion};

/// An editable text field
pub trait TextSurface {
    fn text(&self) -> &str;

    /// Caret as a byte offset into [`TextSurface::text`]
    fn caret(&self) -> usize;

    fn apply(&mut self, edit: &TextEdit);
}

/// Renders the suggestion list
pub trait DisplaySurface {
    fn show_list(&mut self, suggestions: &[Suggestion], focused: usize, geometry: &ListGeometry);

    fn hide_list(&mut self);
}

/// Discrete inputs an [`Editor`] understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The text surface's contents changed
    TextChanged,
    Accept,
    Advance,
    Retreat,
    Escape,
    FocusDelta(isize),
    Focus(usize),
    Key(Key),
}

/// In-memory [`TextSurface`] backed by a `String`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSurface {
    text: String,
    caret: usize,
}

impl StringSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(text: impl Into<String>, caret: usize) -> Result<Self, EditorError> {
        let text = text.into();
        validate_caret(&text, caret)?;
        Ok(Self { text, caret })
    }

    /// Insert `input` at the caret, the way typing would
    pub fn type_text(&mut self, input: &str) {
        self.text.insert_str(self.caret, input);
        self.caret += input.len();
    }

    /// Delete the character before the caret
    pub fn backspace(&mut self) {
        if let Some(ch) = self.text[..self.caret].chars().next_back() {
            self.caret -= ch.len_utf8();
            self.text.remove(self.caret);
        }
    }

    pub fn move_caret(&mut self, caret: usize) -> Result<(), EditorError> {
        validate_caret(&self.text, caret)?;
        self.caret = caret;
        Ok(())
    }
}

impl TextSurface for StringSurface {
    fn text(&self) -> &str {
        &self.text
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn apply(&mut self, edit: &TextEdit) {
        self.text.clone_from(&edit.text);
        self.caret = edit.caret;
    }
}

/// A controller bound to its text and display surfaces
pub struct Editor<T, D> {
    controller: CompletionController,
    text: T,
    display: D,
}

impl<T: TextSurface, D: DisplaySurface> Editor<T, D> {
    pub fn new(text: T, display: D, config: EditorConfig) -> Result<Self, EditorError> {
        Ok(Self {
            controller: CompletionController::with_config(config)?,
            text,
            display,
        })
    }

    /// Feed one event through the controller and push the outcome to the
    /// surfaces.
    ///
    /// Returns whether the event was consumed, which only matters for key
    /// events: an unconsumed key should keep its default text-field action.
    pub fn dispatch(&mut self, index: &Index, event: EditorEvent) -> Result<bool, EditorError> {
        let outcome = match event {
            EditorEvent::TextChanged => {
                let text = self.text.text().to_string();
                let caret = self.text.caret();
                self.controller.on_text_changed(index, text, caret)?;
                KeyOutcome::default()
            }
            EditorEvent::Accept => edit_outcome(self.controller.accept(index)),
            EditorEvent::Advance => edit_outcome(self.controller.advance(index)),
            EditorEvent::Retreat => edit_outcome(self.controller.retreat(index)),
            EditorEvent::Escape => {
                self.controller.escape();
                KeyOutcome::default()
            }
            EditorEvent::FocusDelta(delta) => KeyOutcome {
                consumed: self.controller.focus_delta(delta).is_some(),
                edit: None,
            },
            EditorEvent::Focus(position) => KeyOutcome {
                consumed: self.controller.focus(position).is_some(),
                edit: None,
            },
            EditorEvent::Key(key) => self.controller.handle_key(index, key),
        };

        if let Some(edit) = &outcome.edit {
            self.text.apply(edit);
        }
        self.sync_display();

        Ok(outcome.consumed)
    }

    fn sync_display(&mut self) {
        if self.controller.is_list_shown() {
            self.display.show_list(
                self.controller.suggestions(),
                self.controller.focused(),
                &self.controller.config().list,
            );
        } else {
            self.display.hide_list();
        }
    }

    pub fn controller(&self) -> &CompletionController {
        &self.controller
    }

    pub fn text_surface(&self) -> &T {
        &self.text
    }

    /// Mutable access for typing into the surface; follow up with
    /// [`EditorEvent::TextChanged`]
    pub fn text_surface_mut(&mut self) -> &mut T {
        &mut self.text
    }

    pub fn display_surface(&self) -> &D {
        &self.display
    }

    pub fn into_parts(self) -> (CompletionController, T, D) {
        (self.controller, self.text, self.display)
    }
}

fn edit_outcome(edit: Option<TextEdit>) -> KeyOutcome {
    KeyOutcome {
        consumed: edit.is_some(),
        edit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_and_backspace() {
        let mut surface = StringSurface::new();
        surface.type_text("héllo");
        assert_eq!(surface.caret(), 6);

        surface.backspace();
        surface.backspace();
        assert_eq!(surface.text(), "hél");
        assert_eq!(surface.caret(), 4);

        surface.move_caret(0).unwrap();
        surface.backspace();
        assert_eq!(surface.text(), "hél");
    }

    #[test]
    fn test_type_in_middle() {
        let mut surface = StringSurface::from_parts("ac", 1).unwrap();
        surface.type_text("b");
        assert_eq!(surface.text(), "abc");
        assert_eq!(surface.caret(), 2);
        assert!(surface.move_caret(9).is_err());
    }

    #[test]
    fn test_apply_edit() {
        let mut surface = StringSurface::new();
        surface.apply(&TextEdit {
            text: "done. ".to_string(),
            caret: 6,
        });
        assert_eq!(surface.text(), "done. ");
        assert_eq!(surface.caret(), 6);
    }
}
