//! # Sentence Index
//!
//! Stores the tokenized form of every reference text and answers substring
//! queries against their sentences.
//!
//! Documents are scanned in the order they were first added, and sentences
//! in document order, so the first sentence of the first document is always
//! the first suggestion. Re-adding a document replaces its contents in
//! place without moving it.

use crate::matcher::find_ignore_case;
use crate::tokenizer::{segment_paragraphs, segment_sentences, segment_words};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tuning knobs for [`Index::search`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexOptions {
    /// Queries with fewer characters than this return no results
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Upper bound on the number of suggestions (unlimited when `None`)
    #[serde(default)]
    pub max_results: Option<usize>,
}

fn default_min_query_chars() -> usize {
    3
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            min_query_chars: default_min_query_chars(),
            max_results: None,
        }
    }
}

/// One indexed reference text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    pub id: String,
    pub raw_text: String,
    pub paragraphs: Vec<String>,
    pub sentences: Vec<String>,
    pub words: Vec<String>,
}

impl IndexedDocument {
    fn new(id: String, raw_text: String) -> Self {
        Self {
            paragraphs: segment_paragraphs(&raw_text),
            sentences: segment_sentences(&raw_text),
            words: segment_words(&raw_text),
            id,
            raw_text,
        }
    }
}

/// A search hit: a sentence plus the span the query matched inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub sentence: String,
    /// Byte offset of the match start within `sentence`
    pub start: usize,
    /// Byte offset one past the match end within `sentence`
    pub end: usize,
    pub document_id: String,
    pub sentence_index: usize,
}

impl Suggestion {
    /// The matched part of the sentence
    pub fn matched(&self) -> &str {
        &self.sentence[self.start..self.end]
    }

    pub fn cursor(&self) -> SentenceCursor {
        SentenceCursor::new(self.document_id.clone(), self.sentence_index)
    }
}

/// Position of a sentence within a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceCursor {
    pub document_id: String,
    pub sentence_index: usize,
}

impl SentenceCursor {
    pub fn new(document_id: impl Into<String>, sentence_index: usize) -> Self {
        Self {
            document_id: document_id.into(),
            sentence_index,
        }
    }

    /// Cursor to the following sentence of the same document
    pub fn next(&self) -> Self {
        Self::new(self.document_id.clone(), self.sentence_index + 1)
    }

    /// Cursor to the preceding sentence, or `None` at the first sentence
    pub fn prev(&self) -> Option<Self> {
        self.sentence_index
            .checked_sub(1)
            .map(|index| Self::new(self.document_id.clone(), index))
    }
}

/// A cursor that resolved to an actual sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceRef {
    pub sentence: String,
    pub document_id: String,
    pub sentence_index: usize,
}

impl SentenceRef {
    pub fn cursor(&self) -> SentenceCursor {
        SentenceCursor::new(self.document_id.clone(), self.sentence_index)
    }
}

/// Substring index over the sentences of every added document
#[derive(Debug, Clone, Default)]
pub struct Index {
    /// Documents in first-insertion order
    documents: Vec<IndexedDocument>,

    /// Map from document id to its position in `documents`
    positions: HashMap<String, usize>,

    options: IndexOptions,
}

impl Index {
    /// Create an empty index with default options
    pub fn new() -> Self {
        Self::with_options(IndexOptions::default())
    }

    pub fn with_options(options: IndexOptions) -> Self {
        Self {
            documents: Vec::new(),
            positions: HashMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Tokenize `text` and store it under `document_id`.
    ///
    /// An existing document with the same id is replaced and keeps its scan
    /// position.
    pub fn add_to_index(&mut self, document_id: impl Into<String>, text: impl Into<String>) {
        let document = IndexedDocument::new(document_id.into(), text.into());

        tracing::debug!(
            "Indexed {:?}: {} paragraphs, {} sentences, {} words",
            document.id,
            document.paragraphs.len(),
            document.sentences.len(),
            document.words.len()
        );

        match self.positions.get(&document.id) {
            Some(&position) => self.documents[position] = document,
            None => {
                self.positions.insert(document.id.clone(), self.documents.len());
                self.documents.push(document);
            }
        }
    }

    /// Remove a document, returning it if it was indexed
    pub fn remove(&mut self, document_id: &str) -> Option<IndexedDocument> {
        let position = self.positions.remove(document_id)?;
        let removed = self.documents.remove(position);

        for later in &self.documents[position..] {
            if let Some(slot) = self.positions.get_mut(&later.id) {
                *slot -= 1;
            }
        }

        Some(removed)
    }

    /// Find every sentence containing `query`, ignoring case.
    ///
    /// Short queries return nothing. Each sentence contributes at most one
    /// suggestion, for its first occurrence of the query.
    pub fn search(&self, query: &str) -> Vec<Suggestion> {
        if query.chars().count() < self.options.min_query_chars {
            return Vec::new();
        }

        let limit = self.options.max_results.unwrap_or(usize::MAX);
        let mut results = Vec::new();

        'documents: for document in &self.documents {
            for (sentence_index, sentence) in document.sentences.iter().enumerate() {
                if results.len() >= limit {
                    break 'documents;
                }

                if let Some(span) = find_ignore_case(sentence, query) {
                    results.push(Suggestion {
                        sentence: sentence.clone(),
                        start: span.start,
                        end: span.end,
                        document_id: document.id.clone(),
                        sentence_index,
                    });
                }
            }
        }

        tracing::debug!("Search {:?} matched {} sentences", query, results.len());
        results
    }

    /// Look up one sentence by document id and position
    pub fn get_sentence(&self, document_id: &str, sentence_index: usize) -> Option<SentenceRef> {
        let sentence = self.sentences(document_id)?.get(sentence_index)?;

        Some(SentenceRef {
            sentence: sentence.clone(),
            document_id: document_id.to_string(),
            sentence_index,
        })
    }

    /// Resolve a cursor to its sentence
    pub fn resolve(&self, cursor: &SentenceCursor) -> Option<SentenceRef> {
        self.get_sentence(&cursor.document_id, cursor.sentence_index)
    }

    pub fn document(&self, document_id: &str) -> Option<&IndexedDocument> {
        self.positions
            .get(document_id)
            .map(|&position| &self.documents[position])
    }

    pub fn paragraphs(&self, document_id: &str) -> Option<&[String]> {
        self.document(document_id).map(|d| d.paragraphs.as_slice())
    }

    pub fn sentences(&self, document_id: &str) -> Option<&[String]> {
        self.document(document_id).map(|d| d.sentences.as_slice())
    }

    pub fn words(&self, document_id: &str) -> Option<&[String]> {
        self.document(document_id).map(|d| d.words.as_slice())
    }

    /// Document ids in scan order
    pub fn document_ids(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.id.as_str())
    }

    pub fn contains(&self, document_id: &str) -> bool {
        self.positions.contains_key(document_id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
