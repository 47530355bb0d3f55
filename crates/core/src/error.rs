//! Error types for outline generation and summarization.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while chunking, summarizing, or generating content.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameters that would make an operation loop forever or do nothing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The text or image generation backend reported a failure.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// I/O failure while talking to a generation backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
