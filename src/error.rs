//! Error types for huffmark

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for huffmark operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in huffmark operations
#[derive(Error, Debug)]
pub enum Error {
    /// Tokenization produced no usable tokens. No digest is computed for
    /// empty or whitespace-only input.
    #[error("empty input: no tokens after stripping punctuation")]
    EmptyInput,

    /// A reference file could not be read. Kept distinct from tokenization
    /// errors so callers can tell I/O failures from bad content.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
