//! Subject-matched column headers.

use std::collections::HashSet;
use tracing::debug;

/// Subject keyword and the columns it implies.
const SUBJECT_HEADERS: &[(&str, &[&str])] = &[
    (
        "artificial intelligence",
        &["AI_Model", "Accuracy_Score", "Training_Data", "Algorithm_Type", "Performance_Metric"],
    ),
    (
        "data protection",
        &["Data_Category", "Protection_Level", "Compliance_Status", "Risk_Score", "Last_Audit_Date"],
    ),
    (
        "renewable energy",
        &["Energy_Source", "Capacity_MW", "Efficiency_Rate", "Location", "Installation_Date"],
    ),
    (
        "healthcare",
        &["Patient_ID", "Treatment_Type", "Outcome_Score", "Duration_Days", "Cost_USD"],
    ),
    (
        "finance",
        &["Transaction_ID", "Amount", "Currency", "Status", "Processing_Date"],
    ),
    (
        "marketing",
        &["Campaign_Name", "Reach", "Engagement_Rate", "ROI_Percent", "Channel"],
    ),
];

const GENERIC_HEADERS: &[&str] = &["ID", "Name", "Value", "Status", "Date"];

/// Derives exactly `column_count` unique headers for a subject.
///
/// The first subject keyword contained in `subject` selects a base set; the
/// set is trimmed or extended with `Field_<n>` names, and any collision gets a
/// numeric suffix.
///
/// # Examples
///
/// ```
/// use synthgen_pipeline::derive_headers;
///
/// let headers = derive_headers("Renewable Energy in Europe", 7);
/// assert_eq!(headers[0], "Energy_Source");
/// assert_eq!(headers[5], "Field_6");
/// assert_eq!(headers.len(), 7);
/// ```
pub fn derive_headers(subject: &str, column_count: usize) -> Vec<String> {
    let lowered = subject.to_lowercase();
    let base = SUBJECT_HEADERS
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, headers)| *headers)
        .unwrap_or(GENERIC_HEADERS);

    let candidates = base
        .iter()
        .map(|h| h.to_string())
        .chain((base.len()..).map(|i| format!("Field_{}", i + 1)))
        .take(column_count);

    let headers = dedupe(candidates);
    debug!(subject, columns = headers.len(), "Derived column headers");
    headers
}

fn dedupe(candidates: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();
    for candidate in candidates {
        let mut name = candidate.clone();
        let mut suffix = 2;
        while !seen.insert(name.to_lowercase()) {
            name = format!("{}_{}", candidate, suffix);
            suffix += 1;
        }
        headers.push(name);
    }
    headers
}
