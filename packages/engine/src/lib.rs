//! # AutoComPaste Engine
//!
//! Segments reference texts and finds the sentences that match what the
//! user is typing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ tokenizer: text → paragraphs/sentences/words│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ index: document id → tokenized document     │
//! │  - add/replace documents                    │
//! │  - case-insensitive sentence search         │
//! │  - sentence lookup for paste-forward        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: suggestion list + completion state  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use autocompaste_engine::Index;
//!
//! let mut index = Index::new();
//! index.add_to_index("pets", "I like cats. I like dogs.");
//!
//! let suggestions = index.search("like");
//! assert_eq!(suggestions.len(), 2);
//! assert_eq!(suggestions[1].sentence, "I like dogs.");
//!
//! let next = index.get_sentence("pets", 1).unwrap();
//! assert_eq!(next.sentence, "I like dogs.");
//! ```

pub mod index;
pub mod matcher;
pub mod tokenizer;

pub use index::{
    Index, IndexOptions, IndexedDocument, SentenceCursor, SentenceRef, Suggestion,
};
pub use matcher::find_ignore_case;
pub use tokenizer::{segment_paragraphs, segment_sentences, segment_words, tokenize, SentenceToken};
