//! Deterministic placeholder content for units the model could not fill.
//!
//! Output depends only on the subject and the arguments, so a rerun with the
//! same request degrades the same way.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use synthgen_core::{DocType, Section};
use tracing::{debug, instrument};

/// Marker that opens every placeholder section.
pub const PLACEHOLDER_LABEL: &str = "[Synthetic placeholder]";

const STATUSES: &[&str] = &[
    "Active",
    "Pending",
    "Complete",
    "Inactive",
    "Processing",
    "Verified",
];

const PARAGRAPH_TEMPLATES: &[&str] = &[
    "The {section} section of this {doc} on {subject} stands in for content that could not be generated. It marks where the discussion of {section_lower} for {subject} belongs in the overall structure.",
    "A complete version of this part would examine how {subject} relates to {section_lower}, drawing on concrete examples, measurable outcomes, and the perspectives of the stakeholders involved.",
    "Key questions here include which factors shape {subject}, how those factors are measured, and what evidence would support or challenge the conclusions drawn elsewhere in this {doc_lower}.",
    "Readers should treat this passage as a structural marker rather than analysis. Regenerating the {doc_lower} with the model available will replace it with material specific to {subject}.",
];

/// How a column's placeholder values are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ColumnKind {
    /// Sequential identifier
    Identifier,
    /// Incrementing ISO date
    Date,
    /// Bounded percentage
    Percentage,
    /// Number in a fixed range
    Numeric,
    /// Rotating status word
    Status,
    /// Subject-prefixed sample text
    Text,
}

impl ColumnKind {
    /// Classifies a column by the words in its header.
    ///
    /// # Examples
    ///
    /// ```
    /// use synthgen_pipeline::ColumnKind;
    ///
    /// assert_eq!(ColumnKind::classify("Installation_Date"), ColumnKind::Date);
    /// assert_eq!(ColumnKind::classify("Capacity_MW"), ColumnKind::Numeric);
    /// assert_eq!(ColumnKind::classify("Efficiency_Rate"), ColumnKind::Percentage);
    /// assert_eq!(ColumnKind::classify("Patient_ID"), ColumnKind::Identifier);
    /// assert_eq!(ColumnKind::classify("Location"), ColumnKind::Text);
    /// ```
    pub fn classify(header: &str) -> Self {
        let lowered = header.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        let has = |words: &[&str]| tokens.iter().any(|t| words.contains(t));

        if has(&["date", "timestamp", "datetime", "dob"]) {
            ColumnKind::Date
        } else if has(&["id", "identifier", "uuid", "key"]) {
            ColumnKind::Identifier
        } else if has(&["status", "state"]) {
            ColumnKind::Status
        } else if header.contains('%') || has(&["rate", "percent", "pct", "ratio", "share"]) {
            ColumnKind::Percentage
        } else if has(&[
            "amount", "capacity", "mw", "kw", "cost", "usd", "eur", "price", "count", "value",
            "days", "hours", "duration", "reach", "score", "accuracy", "level", "age",
            "quantity", "qty", "total", "revenue", "number", "size", "weight", "metric", "roi",
        ]) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }
}

/// Produces placeholder sections and rows for one request.
#[derive(Debug, Clone)]
pub struct FallbackSynthesizer {
    subject: String,
    subject_token: String,
}

impl FallbackSynthesizer {
    /// Creates a synthesizer for a subject.
    pub fn new(subject: impl Into<String>) -> Self {
        let subject = subject.into();
        let subject_token = subject
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join("_");
        let subject_token = if subject_token.is_empty() {
            "Item".to_string()
        } else {
            subject_token
        };
        Self {
            subject,
            subject_token,
        }
    }

    /// Subject the placeholders refer to.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// A clearly labelled section with at least one paragraph.
    ///
    /// # Examples
    ///
    /// ```
    /// use synthgen_core::DocType;
    /// use synthgen_pipeline::{FallbackSynthesizer, PLACEHOLDER_LABEL};
    ///
    /// let fallback = FallbackSynthesizer::new("supply chains");
    /// let section = fallback.placeholder_section(DocType::Report, "Risk Assessment", 3);
    /// assert_eq!(section.heading(), "Risk Assessment");
    /// assert_eq!(section.paragraphs().len(), 3);
    /// assert!(section.paragraphs()[0].starts_with(PLACEHOLDER_LABEL));
    /// assert!(section.paragraphs()[0].contains("supply chains"));
    /// ```
    #[instrument(skip(self), fields(subject = %self.subject))]
    pub fn placeholder_section(
        &self,
        doc_type: DocType,
        section_name: &str,
        paragraph_count: usize,
    ) -> Section {
        let doc = doc_type.title();
        let paragraphs: Vec<String> = (0..paragraph_count.max(1))
            .map(|i| {
                let template = PARAGRAPH_TEMPLATES[i % PARAGRAPH_TEMPLATES.len()];
                let body = template
                    .replace("{section_lower}", &section_name.to_lowercase())
                    .replace("{section}", section_name)
                    .replace("{doc_lower}", &doc.to_lowercase())
                    .replace("{doc}", doc)
                    .replace("{subject}", &self.subject);
                if i == 0 {
                    format!("{} {}", PLACEHOLDER_LABEL, body)
                } else {
                    body
                }
            })
            .collect();

        debug!(paragraphs = paragraphs.len(), "Synthesized placeholder section");
        Section::new(section_name, paragraphs)
    }

    /// `count` rows of `headers.len()` cells, numbered from `start_index + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use synthgen_pipeline::FallbackSynthesizer;
    ///
    /// let fallback = FallbackSynthesizer::new("renewable energy");
    /// let headers = vec!["Energy_Source".to_string(), "Installation_Date".to_string()];
    /// let rows = fallback.placeholder_rows(&headers, 0, 2);
    /// assert_eq!(rows[0], vec!["Renewable_Energy_Sample_1", "2024-01-01"]);
    /// assert_eq!(rows[1][1], "2024-01-02");
    /// ```
    #[instrument(skip(self, headers), fields(columns = headers.len()))]
    pub fn placeholder_rows(
        &self,
        headers: &[String],
        start_index: usize,
        count: usize,
    ) -> Vec<Vec<String>> {
        let rows: Vec<Vec<String>> = (0..count)
            .map(|r| {
                let row_number = start_index + r + 1;
                headers
                    .iter()
                    .enumerate()
                    .map(|(column, header)| self.placeholder_cell(header, column, row_number))
                    .collect()
            })
            .collect();

        debug!(rows = rows.len(), start_index, "Synthesized placeholder rows");
        rows
    }

    /// One placeholder value for a 1-based row number.
    pub fn placeholder_cell(&self, header: &str, column: usize, row_number: usize) -> String {
        let n = row_number.max(1);
        match ColumnKind::classify(header) {
            ColumnKind::Identifier => n.to_string(),
            ColumnKind::Date => placeholder_date(n),
            ColumnKind::Status => STATUSES[(n - 1 + column) % STATUSES.len()].to_string(),
            ColumnKind::Percentage => {
                let value: f64 = self.rng_for(header, n).gen_range(1.0..100.0);
                format!("{:.1}%", value)
            }
            ColumnKind::Numeric => {
                let value: u32 = self.rng_for(header, n).gen_range(1..=1000);
                value.to_string()
            }
            ColumnKind::Text => format!("{}_Sample_{}", self.subject_token, n),
        }
    }

    fn rng_for(&self, header: &str, row_number: usize) -> StdRng {
        let seed = fnv1a(self.subject.as_bytes())
            ^ fnv1a(header.as_bytes()).rotate_left(17)
            ^ (row_number as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        StdRng::seed_from_u64(seed)
    }
}

fn placeholder_date(row_number: usize) -> String {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|start| start.checked_add_days(Days::new(row_number as u64 - 1)))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("2024-01-{:02}", (row_number - 1) % 28 + 1))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(0x0100_0000_01b3)
    })
}
