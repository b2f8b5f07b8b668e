use crate::error::CorpusError;

/// Result type for corpus operations
pub type CorpusResult<T> = Result<T, CorpusError>;
