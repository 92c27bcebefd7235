//! Error types for book generation and rendering.

use thiserror::Error;

/// Errors that can occur while assembling or rendering a book.
#[derive(Error, Debug)]
pub enum Error {
    /// The assembled document is missing its page markers. This is the
    /// single validation checkpoint for the whole pipeline.
    #[error("structural integrity failure: {0}")]
    StructuralIntegrity(String),

    /// The external rendering collaborator failed to convert markup into a
    /// paginated file. Carries the underlying message.
    #[error("PDF rendering failed: {0}")]
    RenderingFailed(String),

    /// A generation request was rejected before composition started.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An illustration backend failed to produce an image. Handled
    /// internally by the retry/fallback loop and never surfaced to callers
    /// of the synthesizer.
    #[error("illustration synthesis failed: {0}")]
    Synthesis(String),

    /// A document string could not be parsed by the body-marker convention.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
