//! Error types for compression operations.

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the compression pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The source stream contained no symbols, so no tree can be built.
    #[error("empty input: no symbols to encode")]
    EmptyInput,

    /// A container declared lengths past the available bytes or carried an
    /// invalid tree encoding.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// I/O failure on the source or destination.
    #[error("resource error: {0}")]
    Resource(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed-container error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedContainer(message.into())
    }
}
