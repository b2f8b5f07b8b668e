//! Feeding reference texts into an [`Index`].
//!
//! Every source is read before anything is indexed, so a partially
//! unreadable corpus still indexes its readable texts in manifest order.

use crate::error::CorpusError;
use crate::manifest::TextSource;
use crate::result::CorpusResult;
use crate::source::DocumentSource;
use autocompaste_engine::Index;
use std::path::Path;
use walkdir::WalkDir;

/// Outcome of loading a set of sources
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Titles indexed, in manifest order
    pub indexed: Vec<String>,

    /// Sources that could not be read
    pub failed: Vec<(TextSource, CorpusError)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Read every source, then index the readable ones under their titles
pub fn index_sources(
    index: &mut Index,
    documents: &dyn DocumentSource,
    sources: &[TextSource],
) -> LoadReport {
    let mut report = LoadReport::default();
    let mut texts = Vec::with_capacity(sources.len());

    for source in sources {
        match documents.read(source) {
            Ok(text) => texts.push((source.title.clone(), text)),
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", source.title, e);
                report.failed.push((source.clone(), e));
            }
        }
    }

    for (title, text) in texts {
        index.add_to_index(title.as_str(), text);
        report.indexed.push(title);
    }

    tracing::debug!(
        "Indexed {} of {} text sources",
        report.indexed.len(),
        sources.len()
    );

    report
}

/// Index every `.txt` file under `dir`, keyed by file stem
pub fn index_directory(index: &mut Index, dir: &Path) -> CorpusResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(CorpusError::Missing(dir.display().to_string()));
    }

    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("txt"))
        .collect();
    files.sort();

    let mut indexed = Vec::with_capacity(files.len());
    for path in files {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let text = std::fs::read_to_string(&path)?;
        index.add_to_index(stem, text);
        indexed.push(stem.to_string());
    }

    Ok(indexed)
}
