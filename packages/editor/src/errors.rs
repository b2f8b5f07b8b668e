//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Caret offset {caret} is past the end of the buffer ({len} bytes)")]
    CaretOutOfBounds { caret: usize, len: usize },

    #[error("Caret offset {caret} is not on a character boundary")]
    CaretNotOnCharBoundary { caret: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
