//! Integration tests for editor crate

use autocompaste_editor::{
    ControllerState, DisplaySurface, Editor, EditorConfig, EditorEvent, Key, ListGeometry,
    StringSurface, TextSurface,
};
use autocompaste_engine::{Index, Suggestion};

/// Display surface that remembers what it was last told to show
#[derive(Debug, Default)]
struct RecordingDisplay {
    shown: Option<(Vec<String>, usize)>,
    geometry: Option<ListGeometry>,
    hide_calls: usize,
}

impl DisplaySurface for RecordingDisplay {
    fn show_list(&mut self, suggestions: &[Suggestion], focused: usize, geometry: &ListGeometry) {
        let sentences = suggestions.iter().map(|s| s.sentence.clone()).collect();
        self.shown = Some((sentences, focused));
        self.geometry = Some(*geometry);
    }

    fn hide_list(&mut self) {
        self.shown = None;
        self.hide_calls += 1;
    }
}

fn library() -> Index {
    let mut index = Index::new();
    index.add_to_index(
        "moby",
        "Call me Ishmael. Some years ago, never mind how long precisely, I went to sea. \
         It is a way I have of driving off the spleen.",
    );
    index.add_to_index(
        "tale",
        "It was the best of times. It was the worst of times.",
    );
    index
}

fn editor() -> Editor<StringSurface, RecordingDisplay> {
    Editor::new(
        StringSurface::new(),
        RecordingDisplay::default(),
        EditorConfig::default(),
    )
    .unwrap()
}

fn type_text(
    editor: &mut Editor<StringSurface, RecordingDisplay>,
    index: &Index,
    input: &str,
) {
    editor.text_surface_mut().type_text(input);
    editor.dispatch(index, EditorEvent::TextChanged).unwrap();
}

#[test]
fn test_typing_shows_list_on_display() {
    let index = library();
    let mut editor = editor();

    type_text(&mut editor, &index, "it was");
    let (sentences, focused) = editor.display_surface().shown.clone().unwrap();
    assert_eq!(
        sentences,
        vec!["It was the best of times.", "It was the worst of times."]
    );
    assert_eq!(focused, 0);
    assert_eq!(
        editor.display_surface().geometry,
        Some(ListGeometry::default())
    );
}

#[test]
fn test_document_order_decides_ranking() {
    let index = library();
    let mut editor = editor();

    type_text(&mut editor, &index, "the");
    let (sentences, _) = editor.display_surface().shown.clone().unwrap();
    assert_eq!(sentences[0], "It is a way I have of driving off the spleen.");
    assert_eq!(sentences.len(), 3);
}

#[test]
fn test_full_compose_workflow() {
    let index = library();
    let mut editor = editor();

    type_text(&mut editor, &index, "Dear reader,\ncall me");
    assert_eq!(editor.controller().state(), ControllerState::Suggesting);

    assert!(editor.dispatch(&index, EditorEvent::Key(Key::Enter)).unwrap());
    assert_eq!(
        editor.text_surface().text(),
        "Dear reader,\nCall me Ishmael. "
    );
    assert!(editor.display_surface().shown.is_none());
    assert_eq!(editor.controller().state(), ControllerState::PasteForward);

    assert!(editor.dispatch(&index, EditorEvent::Key(Key::Right)).unwrap());
    assert!(editor.dispatch(&index, EditorEvent::Key(Key::Right)).unwrap());
    assert_eq!(
        editor.text_surface().text(),
        "Dear reader,\nCall me Ishmael. Some years ago, never mind how long precisely, I went to sea. \
         It is a way I have of driving off the spleen. "
    );
    assert_eq!(editor.controller().state(), ControllerState::Idle);

    // Right does nothing once the document is exhausted.
    assert!(!editor.dispatch(&index, EditorEvent::Key(Key::Right)).unwrap());

    assert!(editor.dispatch(&index, EditorEvent::Key(Key::Left)).unwrap());
    assert_eq!(
        editor.text_surface().text(),
        "Dear reader,\nCall me Ishmael. Some years ago, never mind how long precisely, I went to sea. "
    );
    assert_eq!(
        editor.controller().bookmark().unwrap().sentence_index,
        2
    );
    let caret = editor.text_surface().caret();
    assert_eq!(caret, editor.text_surface().text().len());
}

#[test]
fn test_pointer_selection() {
    let index = library();
    let mut editor = editor();

    type_text(&mut editor, &index, "times");
    assert!(editor.dispatch(&index, EditorEvent::Focus(5)).unwrap());
    assert_eq!(editor.display_surface().shown.as_ref().unwrap().1, 1);

    editor.dispatch(&index, EditorEvent::Accept).unwrap();
    assert_eq!(editor.text_surface().text(), "It was the worst of times. ");
    assert_eq!(editor.controller().state(), ControllerState::Idle);
}

#[test]
fn test_escape_hides_but_keeps_bookmark() {
    let index = library();
    let mut editor = editor();

    type_text(&mut editor, &index, "best of");
    editor.dispatch(&index, EditorEvent::Accept).unwrap();
    type_text(&mut editor, &index, "worst");
    assert!(editor.display_surface().shown.is_some());

    assert!(!editor.dispatch(&index, EditorEvent::Key(Key::Escape)).unwrap());
    assert!(editor.display_surface().shown.is_none());
    assert_eq!(editor.controller().state(), ControllerState::PasteForward);

    editor.dispatch(&index, EditorEvent::Advance).unwrap();
    assert_eq!(
        editor.text_surface().text(),
        "It was the best of times. worstIt was the worst of times. "
    );
}

#[test]
fn test_backspace_to_short_sentence_hides_list() {
    let index = library();
    let mut editor = editor();

    type_text(&mut editor, &index, "Hi. Call");
    assert!(editor.display_surface().shown.is_some());

    for _ in 0..3 {
        editor.text_surface_mut().backspace();
        editor.dispatch(&index, EditorEvent::TextChanged).unwrap();
    }
    assert_eq!(editor.text_surface().text(), "Hi. C");
    assert!(editor.display_surface().shown.is_none());
    assert_eq!(editor.controller().state(), ControllerState::Idle);
}

#[test]
fn test_sessions_share_one_index() {
    let index = library();
    let mut first = editor();
    let mut second = editor();

    type_text(&mut first, &index, "Ishmael");
    type_text(&mut second, &index, "worst");

    first.dispatch(&index, EditorEvent::Accept).unwrap();
    second.dispatch(&index, EditorEvent::Accept).unwrap();

    assert_eq!(first.text_surface().text(), "Call me Ishmael. ");
    assert_eq!(second.text_surface().text(), "It was the worst of times. ");
    assert_eq!(first.controller().bookmark().unwrap().document_id, "moby");
    assert!(second.controller().bookmark().is_none());
}

#[test]
fn test_stale_bookmark_after_reindex() {
    let mut index = library();
    let mut editor = editor();

    type_text(&mut editor, &index, "best of");
    editor.dispatch(&index, EditorEvent::Accept).unwrap();

    // The next sentence disappears from the index before the advance.
    index.add_to_index("tale", "It was the best of times.");
    editor.dispatch(&index, EditorEvent::Advance).unwrap();
    assert_eq!(
        editor.text_surface().text(),
        "It was the best of times. It was the worst of times. "
    );
    assert!(editor.controller().bookmark().is_none());

    editor.dispatch(&index, EditorEvent::Retreat).unwrap();
    assert_eq!(editor.text_surface().text(), "It was the best of times. ");
    assert!(editor.controller().bookmark().is_none());
}

#[test]
fn test_invalid_config_rejected() {
    let config: EditorConfig =
        serde_json::from_str(r#"{ "list": { "maxWidth": 0 } }"#).unwrap();
    let result = Editor::new(StringSurface::new(), RecordingDisplay::default(), config);
    assert!(result.is_err());
}
