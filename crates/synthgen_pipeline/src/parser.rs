//! Parsing of free-text model output into paragraphs and table rows.
//!
//! Malformed input is an expected condition: every parse returns a value whose
//! `valid` flag says whether anything usable was found. Nothing here fails.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Line prefixes that mark echoed instructions in prose output.
const PROSE_ECHO_PREFIXES: &[&str] = &[
    "requirements:",
    "topic:",
    "document type:",
    "section:",
    "this is section",
];

/// Line prefixes that mark preamble or echoed instructions in CSV output.
const TABLE_PREAMBLE_PREFIXES: &[&str] = &[
    "csv",
    "column_",
    "here are",
    "here is",
    "sure,",
    "sure!",
    "sure.",
    "note:",
    "format",
    "generate ",
    "important:",
];

/// Whole lines that carry no data.
const TABLE_NOISE_LINES: &[&str] = &["data", "rows", "format:", "output:"];

/// Acceptance thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ParserConfig {
    /// Shortest block kept as a paragraph, in characters
    min_paragraph_chars: usize,
    /// Trailing fields a row may be missing and still be accepted
    missing_field_tolerance: usize,
}

impl ParserConfig {
    /// Creates parser thresholds.
    pub fn new(min_paragraph_chars: usize, missing_field_tolerance: usize) -> Self {
        Self {
            min_paragraph_chars,
            missing_field_tolerance,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(40, 1)
    }
}

/// Paragraphs extracted from a section response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Usable paragraphs in order
    pub paragraphs: Vec<String>,
    /// False when no paragraph survived cleanup
    pub valid: bool,
}

/// Rows extracted from a batch response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    /// Header line, when one was required
    pub header: Option<Vec<String>>,
    /// Accepted rows, each exactly `column_count` cells
    pub rows: Vec<Vec<String>>,
    /// Non-blank lines that were discarded
    pub rejected: usize,
    /// False when no row was accepted
    pub valid: bool,
}

/// Turns raw model text into structured pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser {
    config: ParserConfig,
}

impl ResponseParser {
    /// Creates a parser with the given thresholds.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser thresholds.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Minimum field count for a row to be accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use synthgen_pipeline::{ParserConfig, ResponseParser};
    ///
    /// let parser = ResponseParser::new(ParserConfig::new(40, 1));
    /// assert_eq!(parser.min_fields(4), 3);
    /// assert_eq!(parser.min_fields(1), 1);
    /// ```
    pub fn min_fields(&self, column_count: usize) -> usize {
        column_count
            .saturating_sub(self.config.missing_field_tolerance)
            .max(1)
    }

    /// Splits prose into paragraphs.
    ///
    /// Blocks are separated by blank lines. Fence lines, heading lines and
    /// echoed instruction lines are dropped; text between fences is kept as
    /// prose. List and emphasis markers are stripped, and blocks shorter than
    /// the minimum length are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use synthgen_pipeline::ResponseParser;
    ///
    /// let raw = "```markdown\n# Overview\n\nSolar capacity has doubled across the region in five years.\n```";
    /// let parsed = ResponseParser::default().parse_document(raw);
    /// assert!(parsed.valid);
    /// assert_eq!(
    ///     parsed.paragraphs,
    ///     vec!["Solar capacity has doubled across the region in five years."]
    /// );
    /// ```
    #[instrument(skip(self, raw), fields(raw_len = raw.len()))]
    pub fn parse_document(&self, raw: &str) -> ParsedDocument {
        let mut blocks: Vec<Vec<String>> = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in raw.lines() {
            let trimmed = line.trim();

            if is_fence(trimmed) || trimmed.is_empty() {
                flush(&mut blocks, &mut current);
                continue;
            }
            if trimmed.starts_with('#') {
                trace!(line = trimmed, "Dropping heading");
                flush(&mut blocks, &mut current);
                continue;
            }
            if starts_with_any(&trimmed.to_lowercase(), PROSE_ECHO_PREFIXES) {
                trace!(line = trimmed, "Dropping echoed instruction");
                continue;
            }

            let cleaned = clean_prose_line(trimmed);
            if !cleaned.is_empty() {
                current.push(cleaned);
            }
        }
        flush(&mut blocks, &mut current);

        let min_chars = self.config.min_paragraph_chars;
        let total_blocks = blocks.len();
        let paragraphs: Vec<String> = blocks
            .into_iter()
            .map(|lines| lines.join(" "))
            .filter(|p| p.chars().count() >= min_chars)
            .collect();

        debug!(
            blocks = total_blocks,
            paragraphs = paragraphs.len(),
            "Parsed document response"
        );

        let valid = !paragraphs.is_empty();
        ParsedDocument { paragraphs, valid }
    }

    /// Splits CSV-like output into rows of exactly `column_count` cells.
    ///
    /// When `require_header` is set, the first data-shaped line is taken as the
    /// header rather than a row. A row is accepted when it has at least
    /// [`min_fields`](Self::min_fields) fields; short rows are padded with blank
    /// cells and long rows truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use synthgen_pipeline::ResponseParser;
    ///
    /// let raw = "Solar,450,0.21,Nevada\nSolar,450\nWind,300,0.35";
    /// let parsed = ResponseParser::default().parse_table(raw, 4, false);
    /// assert_eq!(parsed.rows.len(), 2);
    /// assert_eq!(parsed.rows[1], vec!["Wind", "300", "0.35", ""]);
    /// assert_eq!(parsed.rejected, 1);
    /// ```
    #[instrument(skip(self, raw), fields(raw_len = raw.len()))]
    pub fn parse_table(&self, raw: &str, column_count: usize, require_header: bool) -> ParsedTable {
        let min_fields = self.min_fields(column_count);
        let mut header = None;
        let mut rows = Vec::new();
        let mut rejected = 0;

        for line in raw.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if is_fence(trimmed) || is_separator(trimmed) {
                trace!(line = trimmed, "Discarding non-data line");
                rejected += 1;
                continue;
            }

            let mut fields = split_fields(trimmed);
            if is_table_noise(trimmed, fields.len(), min_fields) {
                trace!(line = trimmed, "Discarding preamble line");
                rejected += 1;
                continue;
            }

            if require_header && header.is_none() {
                header = Some(fields);
                continue;
            }

            let populated = fields.iter().filter(|f| !f.is_empty()).count();
            if fields.len() < min_fields || populated == 0 {
                trace!(
                    line = trimmed,
                    fields = fields.len(),
                    min_fields,
                    "Rejecting short row"
                );
                rejected += 1;
                continue;
            }

            fields.resize(column_count, String::new());
            rows.push(fields);
        }

        debug!(
            accepted = rows.len(),
            rejected,
            column_count,
            "Parsed table response"
        );

        let valid = !rows.is_empty();
        ParsedTable {
            header,
            rows,
            rejected,
            valid,
        }
    }
}

/// Whether a row repeats the header names instead of carrying data.
///
/// # Examples
///
/// ```
/// use synthgen_pipeline::is_header_echo;
///
/// let headers = vec!["Energy_Source".to_string(), "Capacity_MW".to_string()];
/// assert!(is_header_echo(&["energy source".to_string(), "Capacity_MW".to_string()], &headers));
/// assert!(!is_header_echo(&["Solar".to_string(), "450".to_string()], &headers));
/// ```
pub fn is_header_echo(row: &[String], headers: &[String]) -> bool {
    let mut compared = 0;
    for (cell, header) in row.iter().zip(headers) {
        if cell.is_empty() {
            continue;
        }
        if normalize_name(cell) != normalize_name(header) {
            return false;
        }
        compared += 1;
    }
    compared > 0
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn flush(blocks: &mut Vec<Vec<String>>, current: &mut Vec<String>) {
    if !current.is_empty() {
        blocks.push(std::mem::take(current));
    }
}

fn is_fence(line: &str) -> bool {
    line.starts_with("```") || line.starts_with("~~~")
}

fn starts_with_any(lowered: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| lowered.starts_with(p))
}

/// Preamble prefixes only count on lines too narrow to be a row, or on lines
/// that introduce what follows with a trailing colon.
fn is_table_noise(line: &str, field_count: usize, min_fields: usize) -> bool {
    let lowered = line.to_lowercase();
    if TABLE_NOISE_LINES.contains(&lowered.as_str()) {
        return true;
    }
    starts_with_any(&lowered, TABLE_PREAMBLE_PREFIXES)
        && (field_count < min_fields || lowered.ends_with(':'))
}

fn is_separator(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '-' | '=' | '|' | '+' | ':' | ',' | '_' | '*' | ' ' | '\t'))
}

/// Strips markdown heading, list, quote, and emphasis markers from one line.
fn clean_prose_line(line: &str) -> String {
    let mut text = line.trim_start_matches('#').trim_start();
    text = text.trim_start_matches('>').trim_start();

    for marker in ["- ", "* ", "+ ", "• "] {
        if let Some(rest) = text.strip_prefix(marker) {
            text = rest.trim_start();
            break;
        }
    }

    let digits = text.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &text[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            text = rest.trim_start();
        }
    }

    text.replace("**", "").replace("__", "").trim().to_string()
}

/// Splits one line into trimmed cells.
///
/// Markdown table lines split on `|`; everything else splits on commas outside
/// double quotes, with `""` as an escaped quote.
fn split_fields(line: &str) -> Vec<String> {
    if line.starts_with('|') || (line.contains('|') && !line.contains(',')) {
        let inner = line.trim_matches('|');
        return inner.split('|').map(clean_cell).collect();
    }

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(clean_cell(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(clean_cell(&current));
    fields
}

/// Trims whitespace and one pair of enclosing quotes.
fn clean_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}
