//! Structured content handed to renderers.

use serde::{Deserialize, Serialize};

/// One titled section of a document.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Section {
    /// Section heading
    heading: String,
    /// Paragraphs in reading order
    paragraphs: Vec<String>,
}

impl Section {
    /// Creates a section.
    pub fn new(heading: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            paragraphs,
        }
    }

    /// Returns a builder for constructing a Section.
    pub fn builder() -> SectionBuilder {
        SectionBuilder::default()
    }

    /// Total whitespace-separated words across all paragraphs.
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum()
    }
}

/// A complete document: title, sections in plan order, closing disclaimer.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct DocumentContent {
    /// Document title
    title: String,
    /// Sections in plan order
    sections: Vec<Section>,
    /// Synthetic-content notice rendered after the last section
    disclaimer: String,
}

impl DocumentContent {
    /// Creates a document.
    pub fn new(title: impl Into<String>, sections: Vec<Section>, disclaimer: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections,
            disclaimer: disclaimer.into(),
        }
    }

    /// Returns a builder for constructing a DocumentContent.
    pub fn builder() -> DocumentContentBuilder {
        DocumentContentBuilder::default()
    }

    /// Total words across all sections.
    pub fn word_count(&self) -> usize {
        self.sections.iter().map(Section::word_count).sum()
    }
}

/// A rectangular table: every row has exactly `headers.len()` cells.
///
/// # Examples
///
/// ```
/// use synthgen_core::TableContent;
///
/// let table = TableContent::new(
///     vec!["Energy_Source".into(), "Capacity_MW".into()],
///     vec![vec!["Solar".into(), "450".into()]],
/// );
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.rows().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TableContent {
    /// Column names, unique
    headers: Vec<String>,
    /// Data rows
    rows: Vec<Vec<String>>,
}

impl TableContent {
    /// Creates a table, padding short rows with blanks and truncating long ones.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Finished content, polymorphic over documents and tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum StructuredContent {
    /// A sectioned document
    Document(DocumentContent),
    /// A table
    Table(TableContent),
}

impl StructuredContent {
    /// The document, if this is one.
    pub fn as_document(&self) -> Option<&DocumentContent> {
        match self {
            StructuredContent::Document(doc) => Some(doc),
            StructuredContent::Table(_) => None,
        }
    }

    /// The table, if this is one.
    pub fn as_table(&self) -> Option<&TableContent> {
        match self {
            StructuredContent::Table(table) => Some(table),
            StructuredContent::Document(_) => None,
        }
    }
}
