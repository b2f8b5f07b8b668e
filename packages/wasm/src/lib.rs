//! JavaScript bindings.
//!
//! Offsets cross the boundary as UTF-16 code unit positions, the way
//! `HTMLTextAreaElement.selectionStart` reports them, and are converted to
//! byte offsets on the way in. Structured results are returned as JSON.

use autocompaste_editor::{
    CompletionController, ControllerState, EditorConfig, Key, KeyOutcome, TextEdit,
};
use autocompaste_engine::{Index, IndexOptions, Suggestion};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn byte_offset(text: &str, utf16_offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units == utf16_offset {
            return Some(byte);
        }
        units += ch.len_utf16();
    }
    (units == utf16_offset).then_some(text.len())
}

/// Byte offset of a caret given in UTF-16 units
fn caret_byte_offset(text: &str, caret: usize) -> Result<usize, String> {
    let len = text.encode_utf16().count();
    if caret > len {
        return Err(format!(
            "Caret {} is past the end of the text ({} UTF-16 units)",
            caret, len
        ));
    }
    byte_offset(text, caret).ok_or_else(|| format!("Caret {} is inside a character", caret))
}

fn utf16_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].encode_utf16().count()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuggestion<'a> {
    sentence: &'a str,
    start: usize,
    end: usize,
    document_id: &'a str,
    sentence_index: usize,
}

impl<'a> From<&'a Suggestion> for JsSuggestion<'a> {
    fn from(suggestion: &'a Suggestion) -> Self {
        Self {
            sentence: &suggestion.sentence,
            start: utf16_offset(&suggestion.sentence, suggestion.start),
            end: utf16_offset(&suggestion.sentence, suggestion.end),
            document_id: &suggestion.document_id,
            sentence_index: suggestion.sentence_index,
        }
    }
}

fn suggestions_json(suggestions: &[Suggestion]) -> Result<String, JsValue> {
    let view: Vec<JsSuggestion> = suggestions.iter().map(JsSuggestion::from).collect();
    to_json(&view)
}

#[derive(Serialize)]
struct JsEdit<'a> {
    text: &'a str,
    caret: usize,
}

impl<'a> From<&'a TextEdit> for JsEdit<'a> {
    fn from(edit: &'a TextEdit) -> Self {
        Self {
            text: &edit.text,
            caret: utf16_offset(&edit.text, edit.caret),
        }
    }
}

fn edit_json(edit: Option<TextEdit>) -> Result<Option<String>, JsValue> {
    edit.as_ref().map(|edit| to_json(&JsEdit::from(edit))).transpose()
}

#[derive(Serialize)]
struct JsKeyOutcome<'a> {
    consumed: bool,
    edit: Option<JsEdit<'a>>,
}

/// Reference texts and their sentence index
#[wasm_bindgen]
#[derive(Default)]
pub struct Engine {
    index: Index,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine::default()
    }

    /// Create an engine from JSON options, e.g. `{"minQueryChars": 3}`
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(options: &str) -> Result<Engine, JsValue> {
        let options: IndexOptions = serde_json::from_str(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;
        Ok(Engine {
            index: Index::with_options(options),
        })
    }

    /// Index `text` under `id`, replacing any previous text with that id
    #[wasm_bindgen(js_name = addToIndex)]
    pub fn add_to_index(&mut self, id: &str, text: &str) {
        self.index.add_to_index(id, text);
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.index.remove(id).is_some()
    }

    /// Suggestions for `query` as a JSON array
    pub fn search(&self, query: &str) -> Result<String, JsValue> {
        suggestions_json(&self.index.search(query))
    }

    /// The sentence at `sentenceIndex` of `id` as JSON
    /// (`{"sentence", "documentId", "sentenceIndex"}`), or `undefined`
    #[wasm_bindgen(js_name = getSentence)]
    pub fn get_sentence(&self, id: &str, sentence_index: usize) -> Result<Option<String>, JsValue> {
        self.index
            .get_sentence(id, sentence_index)
            .as_ref()
            .map(to_json)
            .transpose()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.index.len()
    }
}

/// Completion state for one text field
#[wasm_bindgen]
#[derive(Default)]
pub struct Editor {
    controller: CompletionController,
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        Editor::default()
    }

    /// Create an editor from JSON config, e.g. `{"appendHistory": "retain"}`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: &str) -> Result<Editor, JsValue> {
        let config: EditorConfig = serde_json::from_str(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        let controller = CompletionController::with_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Editor { controller })
    }

    /// Report the field's text and caret; returns the new state name
    #[wasm_bindgen(js_name = textChanged)]
    pub fn text_changed(&mut self, engine: &Engine, text: &str, caret: usize) -> Result<String, JsValue> {
        let caret = caret_byte_offset(text, caret).map_err(|e| JsValue::from_str(&e))?;
        let state = self
            .controller
            .on_text_changed(&engine.index, text, caret)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(state_name(state).to_string())
    }

    /// Accept the focused suggestion; returns the edit as JSON
    pub fn accept(&mut self, engine: &Engine) -> Result<Option<String>, JsValue> {
        edit_json(self.controller.accept(&engine.index))
    }

    pub fn advance(&mut self, engine: &Engine) -> Result<Option<String>, JsValue> {
        edit_json(self.controller.advance(&engine.index))
    }

    pub fn retreat(&mut self, engine: &Engine) -> Result<Option<String>, JsValue> {
        edit_json(self.controller.retreat(&engine.index))
    }

    pub fn escape(&mut self) {
        self.controller.escape();
    }

    #[wasm_bindgen(js_name = focusDelta)]
    pub fn focus_delta(&mut self, delta: i32) -> Option<usize> {
        self.controller.focus_delta(delta as isize)
    }

    pub fn focus(&mut self, position: usize) -> Option<usize> {
        self.controller.focus(position)
    }

    /// Handle a `KeyboardEvent.key` value.
    ///
    /// Returns `{"consumed": bool, "edit": {...} | null}`; when `consumed`
    /// is true the event's default action should be prevented.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, engine: &Engine, key: &str, shift: bool) -> Result<String, JsValue> {
        let outcome = match parse_key(key, shift) {
            Some(key) => self.controller.handle_key(&engine.index, key),
            None => KeyOutcome::default(),
        };
        to_json(&JsKeyOutcome {
            consumed: outcome.consumed,
            edit: outcome.edit.as_ref().map(JsEdit::from),
        })
    }

    /// Shown suggestions as a JSON array (empty when hidden)
    pub fn suggestions(&self) -> Result<String, JsValue> {
        suggestions_json(self.controller.suggestions())
    }

    #[wasm_bindgen(getter)]
    pub fn focused(&self) -> usize {
        self.controller.focused()
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        state_name(self.controller.state()).to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.controller.text().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn caret(&self) -> usize {
        utf16_offset(self.controller.text(), self.controller.caret())
    }
}

fn state_name(state: ControllerState) -> &'static str {
    match state {
        ControllerState::Idle => "idle",
        ControllerState::Suggesting => "suggesting",
        ControllerState::PasteForward => "pasteForward",
    }
}

fn parse_key(key: &str, shift: bool) -> Option<Key> {
    let key = match key {
        "ArrowUp" => Key::Up,
        "ArrowDown" => Key::Down,
        "ArrowLeft" => Key::Left,
        "ArrowRight" => Key::Right,
        "Tab" if shift => Key::BackTab,
        "Tab" => Key::Tab,
        "Enter" => Key::Enter,
        "Escape" => Key::Escape,
        _ => return None,
    };
    Some(key)
}
