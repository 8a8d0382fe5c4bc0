//! Model endpoint error types.

/// Failure conditions observed while talking to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelErrorKind {
    /// The call did not complete within the configured wait
    #[display("Model call timed out after {_0} ms")]
    Timeout(u64),
    /// The endpoint could not be reached
    #[display("Model endpoint unreachable: {_0}")]
    Unreachable(String),
    /// The endpoint answered with a non-success status
    #[display("Model endpoint returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },
    /// The response body could not be decoded
    #[display("Failed to decode model response: {_0}")]
    Decode(String),
    /// The endpoint answered with blank text
    #[display("Model returned an empty response")]
    EmptyResponse,
}

impl ModelErrorKind {
    /// Whether the failure came from the transport rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ModelErrorKind::Timeout(_) | ModelErrorKind::Unreachable(_)
        )
    }
}

/// Model endpoint error with location tracking.
///
/// # Examples
///
/// ```
/// use synthgen_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The specific error condition
    pub kind: ModelErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ModelErrorKind {
        &self.kind
    }
}
