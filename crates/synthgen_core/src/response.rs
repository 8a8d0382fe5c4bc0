//! Raw model responses.

use serde::{Deserialize, Serialize};
use synthgen_error::ModelErrorKind;

/// Why a model call produced no usable text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseErrorKind {
    /// The bounded wait expired
    Timeout,
    /// The endpoint could not be reached or answered abnormally
    Connection,
    /// The endpoint answered with blank text
    Empty,
}

impl From<&ModelErrorKind> for ResponseErrorKind {
    fn from(kind: &ModelErrorKind) -> Self {
        match kind {
            ModelErrorKind::Timeout(_) => ResponseErrorKind::Timeout,
            ModelErrorKind::EmptyResponse => ResponseErrorKind::Empty,
            ModelErrorKind::Unreachable(_)
            | ModelErrorKind::Status { .. }
            | ModelErrorKind::Decode(_) => ResponseErrorKind::Connection,
        }
    }
}

/// Result of one model call, consumed once by the response parser.
///
/// Construct through [`RawResponse::success`] or [`RawResponse::failure`];
/// a successful response always carries non-blank text.
///
/// # Examples
///
/// ```
/// use synthgen_core::{RawResponse, ResponseErrorKind};
///
/// let ok = RawResponse::success("Solar,450,0.21,Nevada");
/// assert!(ok.succeeded());
///
/// let blank = RawResponse::success("   \n");
/// assert_eq!(blank.error_kind(), Some(ResponseErrorKind::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResponseFields")]
pub struct RawResponse {
    text: String,
    error_kind: Option<ResponseErrorKind>,
}

/// Wire form of [`RawResponse`]; decoding goes through the constructors.
#[derive(Deserialize)]
struct ResponseFields {
    #[serde(default)]
    text: String,
    #[serde(default)]
    error_kind: Option<ResponseErrorKind>,
}

impl From<ResponseFields> for RawResponse {
    fn from(fields: ResponseFields) -> Self {
        match fields.error_kind {
            Some(kind) => Self::failure(kind),
            None => Self::success(fields.text),
        }
    }
}

impl RawResponse {
    /// Wraps generated text. Blank text becomes an [`ResponseErrorKind::Empty`] failure.
    pub fn success(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            return Self::failure(ResponseErrorKind::Empty);
        }
        Self {
            text,
            error_kind: None,
        }
    }

    /// Records a failed call.
    pub fn failure(kind: ResponseErrorKind) -> Self {
        Self {
            text: String::new(),
            error_kind: Some(kind),
        }
    }

    /// Generated text (empty on failure).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the call produced text.
    pub fn succeeded(&self) -> bool {
        self.error_kind.is_none()
    }

    /// Failure reason, if any.
    pub fn error_kind(&self) -> Option<ResponseErrorKind> {
        self.error_kind
    }
}
