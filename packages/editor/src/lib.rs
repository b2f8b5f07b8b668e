//! # AutoComPaste Editor
//!
//! Completion state for a text field backed by an [`autocompaste_engine::Index`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ text surface: text + caret                  │
//! └─────────────────────────────────────────────┘
//!                     ↓ text changed / keys
//! ┌─────────────────────────────────────────────┐
//! │ controller: completion state machine        │
//! │  - find the sentence being typed            │
//! │  - suggestion session (list + focus)        │
//! │  - accept, paste forward, undo paste        │
//! └─────────────────────────────────────────────┘
//!                     ↓ edits / list
//! ┌─────────────────────────────────────────────┐
//! │ text surface + display surface              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use autocompaste_editor::{CompletionController, ControllerState};
//! use autocompaste_engine::Index;
//!
//! let mut index = Index::new();
//! index.add_to_index("pets", "I like cats. I like dogs.");
//!
//! let mut controller = CompletionController::new();
//! let state = controller.on_text_changed(&index, "cats", 4).unwrap();
//! assert_eq!(state, ControllerState::Suggesting);
//!
//! let edit = controller.accept(&index).unwrap();
//! assert_eq!(edit.text, "I like cats. ");
//!
//! let edit = controller.advance(&index).unwrap();
//! assert_eq!(edit.text, "I like cats. I like dogs. ");
//!
//! let edit = controller.retreat(&index).unwrap();
//! assert_eq!(edit.text, "I like cats. ");
//! ```

mod append_stack;
mod buffer;
mod config;
mod controller;
mod errors;
mod session;
mod surface;

pub use append_stack::{AppendEntry, AppendStack};
pub use buffer::{current_sentence_bounds, validate_caret, EditBuffer, TextEdit};
pub use config::{AppendHistoryPolicy, EditorConfig, ListGeometry};
pub use controller::{CompletionController, ControllerState, Key, KeyOutcome};
pub use errors::EditorError;
pub use session::SuggestionSession;
pub use surface::{DisplaySurface, Editor, EditorEvent, StringSurface, TextSurface};
