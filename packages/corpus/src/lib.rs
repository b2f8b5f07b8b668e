//! # AutoComPaste Corpus
//!
//! Loads the reference texts that back completion.
//!
//! ```text
//! texts.json ─→ parse_manifest ─→ [TextSource]
//!                                      ↓
//!                   DocumentSource::read (fs or memory)
//!                                      ↓
//!                        index_sources ─→ Index
//! ```

pub mod error;
pub mod loader;
pub mod manifest;
pub mod result;
pub mod source;

pub use error::CorpusError;
pub use loader::{index_directory, index_sources, LoadReport};
pub use manifest::{load_manifest, parse_manifest, TextSource};
pub use result::CorpusResult;
pub use source::{DocumentSource, FsDocumentSource, MemoryDocumentSource};
