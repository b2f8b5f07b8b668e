//! # Suggestion Session
//!
//! Holds the suggestions for the current query and which one is focused.
//!
//! The list is hidden until a query produces results, and is hidden again
//! whenever a query comes back empty. Focus never wraps around: moving past
//! either end of the list pins it at that end.

use autocompaste_engine::{Index, Suggestion};

#[derive(Debug, Clone, Default)]
pub struct SuggestionSession {
    /// Results of the last query, in index scan order
    suggestions: Vec<Suggestion>,

    /// Zero-based position of the focused suggestion
    focused: usize,

    shown: bool,
}

impl SuggestionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `query` against the index and replace the held list
    pub fn set_query(&mut self, index: &Index, query: &str) -> &[Suggestion] {
        self.suggestions = index.search(query);
        self.focused = 0;
        self.shown = !self.suggestions.is_empty();
        &self.suggestions
    }

    /// Move focus by `delta`, clamped to the list bounds.
    ///
    /// Returns the new focus position.
    pub fn focus_delta(&mut self, delta: isize) -> usize {
        self.focus(self.focused.saturating_add_signed(delta))
    }

    /// Focus a specific position, clamped to the list bounds
    pub fn focus(&mut self, position: usize) -> usize {
        self.focused = position.min(self.suggestions.len().saturating_sub(1));
        self.focused
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// The suggestion an accept would use, if there is one
    pub fn accept_focused(&self) -> Option<&Suggestion> {
        self.suggestions.get(self.focused)
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Hide the list, keeping its contents
    pub fn hide(&mut self) {
        self.shown = false;
    }

    /// Drop the list entirely
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.focused = 0;
        self.shown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> Index {
        let mut index = Index::new();
        index.add_to_index("A", "I like cats. I like dogs. I like birds.");
        index
    }

    #[test]
    fn test_session_starts_hidden() {
        let session = SuggestionSession::new();
        assert!(!session.is_shown());
        assert!(session.accept_focused().is_none());
    }

    #[test]
    fn test_set_query_shows_list() {
        let index = pets();
        let mut session = SuggestionSession::new();

        assert_eq!(session.set_query(&index, "like").len(), 3);
        assert!(session.is_shown());
        assert_eq!(session.focused(), 0);
        assert_eq!(session.accept_focused().unwrap().sentence, "I like cats.");
    }

    #[test]
    fn test_empty_query_result_hides_list() {
        let index = pets();
        let mut session = SuggestionSession::new();
        session.set_query(&index, "like");
        session.set_query(&index, "fish");

        assert!(!session.is_shown());
        assert!(session.accept_focused().is_none());
    }

    #[test]
    fn test_requery_resets_focus() {
        let index = pets();
        let mut session = SuggestionSession::new();
        session.set_query(&index, "like");
        session.focus_delta(2);
        session.set_query(&index, "like");
        assert_eq!(session.focused(), 0);
    }

    #[test]
    fn test_focus_clamps_at_both_ends() {
        let index = pets();
        let mut session = SuggestionSession::new();
        session.set_query(&index, "like");

        for _ in 0..10 {
            session.focus_delta(1);
        }
        assert_eq!(session.focused(), 2);
        assert_eq!(session.accept_focused().unwrap().sentence, "I like birds.");

        for _ in 0..10 {
            session.focus_delta(-1);
        }
        assert_eq!(session.focused(), 0);

        assert_eq!(session.focus_delta(isize::MAX), 2);
        assert_eq!(session.focus_delta(isize::MIN), 0);
        assert_eq!(session.focus(7), 2);
    }

    #[test]
    fn test_focus_on_empty_list() {
        let mut session = SuggestionSession::new();
        assert_eq!(session.focus_delta(3), 0);
        assert!(session.accept_focused().is_none());
    }

    #[test]
    fn test_hide_keeps_contents() {
        let index = pets();
        let mut session = SuggestionSession::new();
        session.set_query(&index, "dogs");
        session.hide();

        assert!(!session.is_shown());
        assert_eq!(session.suggestions().len(), 1);

        session.clear();
        assert!(session.suggestions().is_empty());
    }
}
