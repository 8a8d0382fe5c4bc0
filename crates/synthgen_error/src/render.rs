//! Rendering and output error types.

/// Specific error conditions while rendering finished content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// The requested output format cannot represent this content
    #[display("{format} output is not available for {content} content")]
    UnsupportedFormat {
        /// Requested format name
        format: String,
        /// Content kind name
        content: String,
    },
    /// Writing the rendered bytes failed
    #[display("Failed to write {path}: {message}")]
    Write {
        /// Destination path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// JSON serialization failed
    #[display("Failed to serialize content: {_0}")]
    Serialize(String),
}

/// Render error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The specific error condition
    pub kind: RenderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new RenderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
