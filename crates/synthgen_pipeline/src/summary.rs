//! Compact section summaries for prompt continuity.
//!
//! Later section prompts carry a short summary of earlier sections instead of
//! their full text, keeping prompts bounded for long documents.

use crate::prompt::{MAX_SUMMARY_CHARS, truncate_chars};
use synthgen_core::Section;
use tracing::{debug, instrument};

/// Sentences kept from a section's opening paragraph.
const SUMMARY_SENTENCES: usize = 2;

/// Summarizes a finished section as `"<heading>: <opening sentences>"`.
///
/// # Examples
///
/// ```
/// use synthgen_core::Section;
/// use synthgen_pipeline::summarize_section;
///
/// let section = Section::new(
///     "Market Analysis",
///     vec!["Demand grew. Prices fell. Supply chains shifted.".to_string()],
/// );
/// assert_eq!(summarize_section(&section), "Market Analysis: Demand grew. Prices fell.");
/// ```
#[instrument(skip(section), fields(heading = %section.heading()))]
pub fn summarize_section(section: &Section) -> String {
    let opening = section
        .paragraphs()
        .first()
        .map(|p| leading_sentences(p, SUMMARY_SENTENCES))
        .unwrap_or_default();

    let summary = if opening.is_empty() {
        section.heading().clone()
    } else {
        format!("{}: {}", section.heading(), opening)
    };

    let summary = truncate_chars(&summary, MAX_SUMMARY_CHARS).to_string();
    debug!(chars = summary.len(), "Summarized section");
    summary
}

fn leading_sentences(paragraph: &str, count: usize) -> String {
    let mut end = paragraph.len();
    let mut seen = 0;
    for (idx, ch) in paragraph.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            let next = paragraph[idx + ch.len_utf8()..].chars().next();
            if next.is_none_or(char::is_whitespace) {
                seen += 1;
                if seen == count {
                    end = idx + ch.len_utf8();
                    break;
                }
            }
        }
    }
    paragraph[..end].trim().to_string()
}
