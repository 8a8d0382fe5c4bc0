//! Prompt construction for sections and row batches.
//!
//! Every function here is pure: identical arguments always produce an
//! identical prompt, and no model output is ever inspected.

use crate::plan::SectionTargets;
use crate::sections::section_instruction;
use synthgen_core::DocType;

/// Prior sections carried into a section prompt.
pub const MAX_PRIOR_SUMMARIES: usize = 2;

/// Characters kept from each prior summary.
pub const MAX_SUMMARY_CHARS: usize = 400;

/// Builds the prompt for one document section.
///
/// Only the last [`MAX_PRIOR_SUMMARIES`] summaries are included, each cut to
/// [`MAX_SUMMARY_CHARS`], so the prompt stays bounded however long the
/// document grows.
///
/// # Examples
///
/// ```
/// use synthgen_core::DocType;
/// use synthgen_pipeline::{SectionTargets, build_section_prompt};
///
/// let targets = SectionTargets { position: 2, total: 8, paragraphs: 3, words: 190 };
/// let prompt = build_section_prompt("solar power", DocType::Report, "Market Analysis", &[], targets);
/// assert!(prompt.contains("solar power"));
/// assert!(prompt.contains("Market Analysis"));
/// ```
pub fn build_section_prompt(
    subject: &str,
    doc_type: DocType,
    section_name: &str,
    prior_summaries: &[String],
    targets: SectionTargets,
) -> String {
    let instruction = section_instruction(doc_type, section_name)
        .unwrap_or("Write a detailed, well-structured section");

    let mut prompt = format!(
        "{instruction} for a {doc_type} about {subject}.\n\n\
         This is section {position} of {total}, titled \"{section_name}\".\n\n",
        position = targets.position,
        total = targets.total,
    );

    let start = prior_summaries.len().saturating_sub(MAX_PRIOR_SUMMARIES);
    let recent = &prior_summaries[start..];
    if !recent.is_empty() {
        prompt.push_str("Earlier sections covered:\n");
        for summary in recent {
            prompt.push_str("- ");
            prompt.push_str(truncate_chars(summary, MAX_SUMMARY_CHARS));
            prompt.push('\n');
        }
        prompt.push_str("Continue from them without repeating their content.\n\n");
    }

    prompt.push_str(&format!(
        "REQUIREMENTS:\n\
         - Write {paragraphs} paragraphs, about {words} words in total\n\
         - Use concrete examples and analysis specific to {subject}\n\
         - Use professional language suited to a {doc_type}\n\
         - Separate paragraphs with a blank line\n\
         - Do not repeat the section title and do not use markdown headings, lists, or code blocks\n",
        paragraphs = targets.paragraphs,
        words = targets.words,
    ));

    prompt
}

/// Builds the prompt for one batch of table rows.
///
/// # Examples
///
/// ```
/// use synthgen_pipeline::build_row_batch_prompt;
///
/// let headers = vec!["Energy_Source".to_string(), "Capacity_MW".to_string()];
/// let prompt = build_row_batch_prompt("renewable energy", &headers, 25);
/// assert!(prompt.contains("Energy_Source, Capacity_MW"));
/// assert!(prompt.contains("25 rows"));
/// ```
pub fn build_row_batch_prompt(subject: &str, headers: &[String], batch_size: usize) -> String {
    format!(
        "Generate realistic synthetic data about {subject}. \
         Create exactly {batch_size} rows with these {count} columns in this order: {columns}\n\n\
         IMPORTANT: Return ONLY the data rows in CSV format. Do NOT include:\n\
         - A header row\n\
         - The word \"csv\" or code fences\n\
         - Numbering, explanations, or notes\n\n\
         Format each row as: value1,value2,value3\n\
         Every row must have exactly {count} comma-separated values. \
         Quote any value that contains a comma.\n\n\
         Generate {batch_size} rows of varied, contextually appropriate data related to {subject}.",
        count = headers.len(),
        columns = headers.join(", "),
    )
}

/// Builds a fresh prompt for a re-attempt.
///
/// Appends a stricter reminder naming why the previous attempt was rejected.
pub fn with_retry_hint(prompt: &str, reason: &str) -> String {
    format!(
        "{prompt}\n\nThe previous answer was rejected ({reason}). \
         Follow the format requirements above exactly and return only the requested content."
    )
}

/// Truncates on a character boundary.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
