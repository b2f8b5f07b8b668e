//! Text source manifests.
//!
//! A manifest is a JSON array listing the reference texts to index:
//!
//! ```json
//! [
//!   { "title": "Moby Dick", "url": "texts/moby.txt" },
//!   { "title": "A Tale of Two Cities", "url": "texts/tale.txt" }
//! ]
//! ```
//!
//! `url` is resolved relative to the manifest's directory. Entries missing
//! a `title` or `url` are skipped with a warning instead of failing the
//! whole manifest.

use crate::error::CorpusError;
use crate::result::CorpusResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One reference text listed in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSource {
    /// Title, used as the document id in the index
    pub title: String,

    /// Location of the text, relative to the manifest
    pub url: String,
}

impl TextSource {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Parse a manifest, skipping malformed entries
pub fn parse_manifest(json: &str) -> CorpusResult<Vec<TextSource>> {
    let data: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(entries) = data else {
        return Err(CorpusError::ManifestNotArray);
    };

    let mut sources = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<TextSource>(entry.clone()) {
            Ok(source) => sources.push(source),
            Err(e) => tracing::warn!("Skipping text source {}: {}", entry, e),
        }
    }

    Ok(sources)
}

/// Read and parse a manifest file
pub fn load_manifest(path: &Path) -> CorpusResult<Vec<TextSource>> {
    let content = std::fs::read_to_string(path)?;
    parse_manifest(&content)
}
