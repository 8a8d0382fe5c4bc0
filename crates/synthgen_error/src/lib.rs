//! Error types for synthgen.
//!
//! Each concern owns a small error struct that records where it was raised.
//! [`SynthgenError`] aggregates them for the public API.

mod config;
mod http;
mod model;
mod render;

pub use config::ConfigError;
pub use http::HttpError;
pub use model::{ModelError, ModelErrorKind};
pub use render::{RenderError, RenderErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum SynthgenErrorKind {
    /// HTTP client construction error
    Http(HttpError),
    /// Model endpoint error
    Model(ModelError),
    /// Configuration or request validation error
    Config(ConfigError),
    /// Rendering error
    Render(RenderError),
}

impl std::fmt::Display for SynthgenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthgenErrorKind::Http(e) => write!(f, "{}", e),
            SynthgenErrorKind::Model(e) => write!(f, "{}", e),
            SynthgenErrorKind::Config(e) => write!(f, "{}", e),
            SynthgenErrorKind::Render(e) => write!(f, "{}", e),
        }
    }
}

/// Synthgen error with kind discrimination.
#[derive(Debug)]
pub struct SynthgenError(Box<SynthgenErrorKind>);

impl SynthgenError {
    /// Create a new error from a kind.
    pub fn new(kind: SynthgenErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SynthgenErrorKind {
        &self.0
    }
}

impl std::fmt::Display for SynthgenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Synthgen Error: {}", self.0)
    }
}

impl std::error::Error for SynthgenError {}

impl<T> From<T> for SynthgenError
where
    T: Into<SynthgenErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for synthgen operations.
pub type SynthgenResult<T> = std::result::Result<T, SynthgenError>;
