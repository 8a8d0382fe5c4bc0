//! Core data types for synthgen.
//!
//! This crate provides the request, response, and content types shared by
//! the model clients, the generation pipeline, and the renderers.

mod content;
mod doc_type;
mod request;
mod response;
mod result;

pub use content::{
    DocumentContent, DocumentContentBuilder, Section, SectionBuilder, StructuredContent,
    TableContent,
};
pub use doc_type::DocType;
pub use request::{
    ContentKind, DEFAULT_SUBJECT, DocumentShape, GenerationRequest, RequestShape, TableShape,
};
pub use response::{RawResponse, ResponseErrorKind};
pub use result::{GenerationResult, UnitStats, UnitStatsBuilder};
