//! HTTP transport setup errors.

/// The HTTP client for a model endpoint could not be built.
///
/// Raised when a client is constructed, before any request is sent. Failures
/// of individual calls are [`ModelError`](crate::ModelError)s instead.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// Endpoint the client was being built for
    pub endpoint: String,
    /// Why construction failed
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Records a client construction failure for `endpoint`.
    ///
    /// # Examples
    ///
    /// ```
    /// use synthgen_error::HttpError;
    ///
    /// let err = HttpError::new("http://localhost:11434", "TLS backend unavailable");
    /// assert_eq!(err.endpoint, "http://localhost:11434");
    /// assert!(err.to_string().contains("could not build client for http://localhost:11434"));
    /// ```
    #[track_caller]
    pub fn new(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            endpoint: endpoint.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HTTP Error: could not build client for {}: {} at line {} in {}",
            self.endpoint, self.message, self.line, self.file
        )
    }
}

impl std::error::Error for HttpError {}
