use crate::error::CorpusError;
use crate::manifest::TextSource;
use crate::result::CorpusResult;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where the raw text of a [`TextSource`] comes from
pub trait DocumentSource {
    /// Read the full text of a source
    fn read(&self, source: &TextSource) -> CorpusResult<String>;
}

/// Reads sources from disk, relative to a root directory
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Source rooted at the directory containing `manifest`
    pub fn for_manifest(manifest: &Path) -> Self {
        Self::new(manifest.parent().unwrap_or(Path::new(".")))
    }

    pub fn resolve(&self, source: &TextSource) -> PathBuf {
        self.root.join(&source.url)
    }
}

impl DocumentSource for FsDocumentSource {
    fn read(&self, source: &TextSource) -> CorpusResult<String> {
        let path = self.resolve(source);
        std::fs::read_to_string(&path).map_err(|e| CorpusError::Unreadable {
            title: source.title.clone(),
            path,
            source: e,
        })
    }
}

/// In-memory sources keyed by url, for tests and embedders
pub struct MemoryDocumentSource {
    pub texts: HashMap<String, String>,
}

impl MemoryDocumentSource {
    pub fn new() -> Self {
        Self {
            texts: HashMap::new(),
        }
    }

    pub fn add_text(&mut self, url: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(url.into(), text.into());
    }
}

impl Default for MemoryDocumentSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for MemoryDocumentSource {
    fn read(&self, source: &TextSource) -> CorpusResult<String> {
        self.texts
            .get(&source.url)
            .cloned()
            .ok_or_else(|| CorpusError::Missing(source.title.clone()))
    }
}
