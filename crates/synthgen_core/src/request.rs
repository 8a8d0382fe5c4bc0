//! Generation request types.

use crate::DocType;
use serde::{Deserialize, Serialize};
use synthgen_error::ConfigError;

/// Subject used when the caller supplies a blank one.
pub const DEFAULT_SUBJECT: &str = "general topics";

/// Which deliverable a request produces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    /// A sectioned prose document
    Document,
    /// A table of rows and columns
    Dataset,
}

/// Shape of a document request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct DocumentShape {
    /// Document template to follow
    doc_type: DocType,
    /// Requested length in pages
    page_count: u32,
}

impl DocumentShape {
    /// Creates a document shape.
    pub fn new(doc_type: DocType, page_count: u32) -> Self {
        Self {
            doc_type,
            page_count,
        }
    }
}

/// Shape of a dataset request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TableShape {
    /// Number of data rows
    row_count: usize,
    /// Number of columns
    column_count: usize,
}

impl TableShape {
    /// Creates a table shape.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
        }
    }
}

/// Shape parameters, discriminated by content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RequestShape {
    /// Document shape
    Document(DocumentShape),
    /// Dataset shape
    Dataset(TableShape),
}

/// A single request for synthetic content. Immutable once created.
///
/// # Examples
///
/// ```
/// use synthgen_core::{ContentKind, GenerationRequest};
///
/// let request = GenerationRequest::dataset("renewable energy", 10, 4);
/// assert_eq!(request.kind(), ContentKind::Dataset);
/// assert!(request.validate().is_ok());
///
/// let blank = GenerationRequest::dataset("   ", 10, 4);
/// assert_eq!(blank.subject(), "general topics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(from = "RequestFields")]
pub struct GenerationRequest {
    /// Topic the content should be about
    subject: String,
    /// Shape parameters
    shape: RequestShape,
}

/// Wire form of [`GenerationRequest`]; decoding goes through [`GenerationRequest::new`].
#[derive(Deserialize)]
struct RequestFields {
    subject: String,
    shape: RequestShape,
}

impl From<RequestFields> for GenerationRequest {
    fn from(fields: RequestFields) -> Self {
        Self::new(fields.subject, fields.shape)
    }
}

impl GenerationRequest {
    /// Creates a request, normalising a blank subject to [`DEFAULT_SUBJECT`].
    pub fn new(subject: impl Into<String>, shape: impl Into<RequestShape>) -> Self {
        let subject = subject.into();
        let trimmed = subject.trim();
        let subject = if trimmed.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            subject,
            shape: shape.into(),
        }
    }

    /// Creates a document request.
    pub fn document(subject: impl Into<String>, doc_type: DocType, page_count: u32) -> Self {
        Self::new(subject, DocumentShape::new(doc_type, page_count))
    }

    /// Creates a dataset request.
    pub fn dataset(subject: impl Into<String>, row_count: usize, column_count: usize) -> Self {
        Self::new(subject, TableShape::new(row_count, column_count))
    }

    /// The kind of deliverable this request produces.
    pub fn kind(&self) -> ContentKind {
        match self.shape {
            RequestShape::Document(_) => ContentKind::Document,
            RequestShape::Dataset(_) => ContentKind::Dataset,
        }
    }

    /// Rejects structurally invalid requests.
    ///
    /// Upper bounds are enforced by the input collaborator; only shapes that
    /// cannot produce any content are refused here.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the page, row, or column count is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.shape {
            RequestShape::Document(shape) if shape.page_count == 0 => {
                Err(ConfigError::new("page count must be at least 1"))
            }
            RequestShape::Dataset(shape) if shape.row_count == 0 => {
                Err(ConfigError::new("row count must be at least 1"))
            }
            RequestShape::Dataset(shape) if shape.column_count == 0 => {
                Err(ConfigError::new("column count must be at least 1"))
            }
            _ => Ok(()),
        }
    }
}
