//! Document types supported by the generator.

use serde::{Deserialize, Serialize};

/// The kind of document to synthesize.
///
/// Each type maps to a fixed section template in the pipeline.
///
/// # Examples
///
/// ```
/// use synthgen_core::DocType;
///
/// let doc_type: DocType = "report".parse().unwrap();
/// assert_eq!(doc_type, DocType::Report);
/// assert_eq!(doc_type.to_string(), "report");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocType {
    /// Technical whitepaper
    Whitepaper,
    /// Long-form article
    Article,
    /// Business report
    Report,
    /// Project proposal
    Proposal,
    /// IT design document
    Design,
}

impl DocType {
    /// Human-readable title used in document headings.
    pub fn title(&self) -> &'static str {
        match self {
            DocType::Whitepaper => "Whitepaper",
            DocType::Article => "Article",
            DocType::Report => "Report",
            DocType::Proposal => "Project Proposal",
            DocType::Design => "Design Document",
        }
    }
}
