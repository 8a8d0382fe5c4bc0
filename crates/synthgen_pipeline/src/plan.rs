//! Unit planning: pages to sections, rows to batches.

use crate::sections::{SectionTemplate, section_templates};
use synthgen_core::DocType;
use tracing::{debug, instrument};

/// Paragraphs a printed page holds at roughly 275 words per page.
pub const PARAGRAPHS_PER_PAGE: usize = 3;

/// Words requested per page across the whole document.
pub const WORDS_PER_PAGE: usize = 300;

/// Bounds on the paragraph target of one section.
pub const MIN_SECTION_PARAGRAPHS: usize = 1;
/// Upper bound on the paragraph target of one section.
pub const MAX_SECTION_PARAGRAPHS: usize = 12;

/// Depth targets for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTargets {
    /// 1-based position in the plan
    pub position: usize,
    /// Number of sections in the plan
    pub total: usize,
    /// Paragraphs to ask for
    pub paragraphs: usize,
    /// Words to ask for
    pub words: usize,
}

/// One document section to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionUnit {
    /// Template the section comes from
    pub template: SectionTemplate,
    /// Depth targets
    pub targets: SectionTargets,
}

impl SectionUnit {
    /// Diagnostic label.
    pub fn label(&self) -> String {
        format!("section {}: {}", self.targets.position, self.template.name)
    }
}

/// One slice of table rows to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBatch {
    /// 0-based batch index
    pub index: usize,
    /// Rows before this batch
    pub offset: usize,
    /// Rows in this batch
    pub size: usize,
}

impl RowBatch {
    /// Diagnostic label, with 1-based inclusive row numbers.
    pub fn label(&self) -> String {
        format!("rows {}-{}", self.offset + 1, self.offset + self.size)
    }
}

/// Ephemeral scope of one model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationUnit {
    /// A document section
    Section(SectionUnit),
    /// A table row batch
    RowBatch(RowBatch),
}

impl GenerationUnit {
    /// Diagnostic label.
    pub fn label(&self) -> String {
        match self {
            GenerationUnit::Section(unit) => unit.label(),
            GenerationUnit::RowBatch(batch) => batch.label(),
        }
    }
}

/// Paragraph target per section for a page count.
///
/// Grows with the page count and is clamped to
/// `[MIN_SECTION_PARAGRAPHS, MAX_SECTION_PARAGRAPHS]`.
///
/// # Examples
///
/// ```
/// use synthgen_pipeline::paragraphs_per_section;
///
/// assert_eq!(paragraphs_per_section(1, 8), 1);
/// assert!(paragraphs_per_section(20, 8) > paragraphs_per_section(5, 8));
/// assert_eq!(paragraphs_per_section(50, 8), 12);
/// ```
pub fn paragraphs_per_section(page_count: u32, section_count: usize) -> usize {
    let sections = section_count.max(1);
    let total = (page_count.max(1) as usize) * PARAGRAPHS_PER_PAGE;
    total
        .div_ceil(sections)
        .clamp(MIN_SECTION_PARAGRAPHS, MAX_SECTION_PARAGRAPHS)
}

/// Section plan for a document: one unit per template section.
///
/// The page count deepens sections; it never adds or removes them.
#[instrument]
pub fn plan_sections(doc_type: DocType, page_count: u32) -> Vec<SectionUnit> {
    let templates = section_templates(doc_type);
    let total = templates.len();
    let paragraphs = paragraphs_per_section(page_count, total);
    let words = (page_count.max(1) as usize * WORDS_PER_PAGE) / total.max(1);

    let plan: Vec<SectionUnit> = templates
        .iter()
        .enumerate()
        .map(|(i, template)| SectionUnit {
            template: *template,
            targets: SectionTargets {
                position: i + 1,
                total,
                paragraphs,
                words,
            },
        })
        .collect();

    debug!(
        sections = plan.len(),
        paragraphs_per_section = paragraphs,
        words_per_section = words,
        "Planned document sections"
    );
    plan
}

/// Batch plan for a table: `ceil(rows / cap)` batches, never zero.
///
/// # Examples
///
/// ```
/// use synthgen_pipeline::plan_row_batches;
///
/// let batches = plan_row_batches(120, 50);
/// assert_eq!(batches.len(), 3);
/// assert_eq!(batches[2].offset, 100);
/// assert_eq!(batches[2].size, 20);
/// ```
#[instrument]
pub fn plan_row_batches(row_count: usize, rows_per_batch: usize) -> Vec<RowBatch> {
    let cap = rows_per_batch.max(1);
    let rows = row_count.max(1);

    let batches: Vec<RowBatch> = (0..rows.div_ceil(cap))
        .map(|index| {
            let offset = index * cap;
            RowBatch {
                index,
                offset,
                size: cap.min(rows - offset),
            }
        })
        .collect();

    debug!(batches = batches.len(), rows, cap, "Planned row batches");
    batches
}
