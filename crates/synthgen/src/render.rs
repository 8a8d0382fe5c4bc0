//! Serialization of finished content to text, markdown, CSV, or JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use synthgen_core::{ContentKind, DocumentContent, StructuredContent, TableContent};
use synthgen_error::{RenderError, RenderErrorKind, SynthgenResult};
use tracing::{debug, instrument};

const BANNER_WIDTH: usize = 80;
const BANNER_TITLE: &str = "SYNTHETIC DOCUMENT - GENERATED CONTENT";

/// Output encodings.
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
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Plain text with a banner header (documents)
    Text,
    /// Markdown headings and paragraphs (documents)
    Markdown,
    /// Comma-separated values (tables)
    Csv,
    /// Pretty-printed JSON (either)
    Json,
}

impl OutputFormat {
    /// Format used when none is requested.
    pub fn default_for(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Document => OutputFormat::Text,
            ContentKind::Dataset => OutputFormat::Csv,
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Renders content in the requested format.
///
/// # Errors
///
/// Returns a [`RenderError`] for pairings that cannot represent the content
/// (CSV documents, text or markdown tables) and for JSON failures.
///
/// # Examples
///
/// ```
/// use synthgen::{OutputFormat, render};
/// use synthgen_core::{StructuredContent, TableContent};
///
/// let table = TableContent::new(
///     vec!["Location".into(), "Capacity_MW".into()],
///     vec![vec!["Reno, NV".into(), "450".into()]],
/// );
/// let csv = render(&StructuredContent::Table(table), OutputFormat::Csv).unwrap();
/// assert_eq!(csv, "Location,Capacity_MW\n\"Reno, NV\",450\n");
/// ```
#[instrument(skip(content), fields(format = %format))]
pub fn render(content: &StructuredContent, format: OutputFormat) -> SynthgenResult<String> {
    let rendered = match (content, format) {
        (_, OutputFormat::Json) => render_json(content)?,
        (StructuredContent::Document(doc), OutputFormat::Text) => render_document_text(doc),
        (StructuredContent::Document(doc), OutputFormat::Markdown) => {
            render_document_markdown(doc)
        }
        (StructuredContent::Table(table), OutputFormat::Csv) => render_table_csv(table),
        (StructuredContent::Document(_), _) => {
            return Err(unsupported(format, ContentKind::Document).into());
        }
        (StructuredContent::Table(_), _) => {
            return Err(unsupported(format, ContentKind::Dataset).into());
        }
    };

    debug!(bytes = rendered.len(), "Rendered content");
    Ok(rendered)
}

/// Renders content and writes it to `path`.
///
/// # Errors
///
/// Returns a [`RenderError`] if rendering or the write fails.
#[instrument(skip(content), fields(path = %path.display(), format = %format))]
pub fn write_output(
    content: &StructuredContent,
    format: OutputFormat,
    path: &Path,
) -> SynthgenResult<()> {
    let rendered = render(content, format)?;
    std::fs::write(path, rendered).map_err(|e| {
        RenderError::new(RenderErrorKind::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    debug!("Wrote output file");
    Ok(())
}

/// Plain text: banner, title, sections, disclaimer.
pub fn render_document_text(doc: &DocumentContent) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = format!("{rule}\n{BANNER_TITLE}\n{rule}\n\n{}\n\n", doc.title());

    for section in doc.sections() {
        out.push_str(section.heading());
        out.push_str("\n\n");
        for paragraph in section.paragraphs() {
            out.push_str(paragraph);
            out.push_str("\n\n");
        }
    }

    out.push_str("Disclaimer\n\n");
    out.push_str(doc.disclaimer());
    out.push('\n');
    out
}

/// Markdown: `#` title, `##` section headings.
pub fn render_document_markdown(doc: &DocumentContent) -> String {
    let mut out = format!("# {}\n\n", doc.title());

    for section in doc.sections() {
        out.push_str(&format!("## {}\n\n", section.heading()));
        for paragraph in section.paragraphs() {
            out.push_str(paragraph);
            out.push_str("\n\n");
        }
    }

    out.push_str("## Disclaimer\n\n");
    out.push_str(doc.disclaimer());
    out.push('\n');
    out
}

/// CSV with a header line; cells are quoted only when needed.
pub fn render_table_csv(table: &TableContent) -> String {
    let mut out = String::new();
    for line in std::iter::once(table.headers()).chain(table.rows()) {
        let cells: Vec<String> = line.iter().map(|cell| csv_cell(cell)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Pretty JSON of the tagged content.
pub fn render_json(content: &StructuredContent) -> Result<String, RenderError> {
    serde_json::to_string_pretty(content)
        .map_err(|e| RenderError::new(RenderErrorKind::Serialize(e.to_string())))
}

fn csv_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[track_caller]
fn unsupported(format: OutputFormat, content: ContentKind) -> RenderError {
    RenderError::new(RenderErrorKind::UnsupportedFormat {
        format: format.to_string(),
        content: content.to_string(),
    })
}
