use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading reference texts
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse text sources: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to parse text sources: data is not an array")]
    ManifestNotArray,

    #[error("Source {title:?} has no readable text at {path}")]
    Unreadable {
        title: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source {0:?} is not available")]
    Missing(String),
}
