use synthgen_pipeline::{ParserConfig, ResponseParser};

#[test]
fn test_short_row_rejected_against_four_columns() {
    let parsed = ResponseParser::default().parse_table("Solar,450", 4, false);

    assert!(!parsed.valid);
    assert!(parsed.rows.is_empty());
    assert_eq!(parsed.rejected, 1);
}

#[test]
fn test_row_missing_one_field_is_padded() {
    let parsed = ResponseParser::default().parse_table("Solar,450,0.21", 4, false);

    assert!(parsed.valid);
    assert_eq!(parsed.rows, vec![vec!["Solar", "450", "0.21", ""]]);
}

#[test]
fn test_long_row_is_truncated() {
    let parsed = ResponseParser::default().parse_table("a,b,c,d,e", 3, false);

    assert_eq!(parsed.rows, vec![vec!["a", "b", "c"]]);
}

#[test]
fn test_tolerance_zero_requires_every_field() {
    let parser = ResponseParser::new(ParserConfig::new(40, 0));
    let parsed = parser.parse_table("Solar,450,0.21\nWind,300,0.35,Texas", 4, false);

    assert_eq!(parsed.rows.len(), 1);
    assert_eq!(parsed.rows[0][0], "Wind");
    assert_eq!(parsed.rejected, 1);
}

#[test]
fn test_preamble_and_fences_are_discarded() {
    let raw = "Here are the rows:\n```csv\nSolar,450,0.21,Nevada\n```\nNote: values are synthetic";
    let parsed = ResponseParser::default().parse_table(raw, 4, false);

    assert_eq!(parsed.rows, vec![vec!["Solar", "450", "0.21", "Nevada"]]);
    assert_eq!(parsed.rejected, 4);
}

#[test]
fn test_full_rows_starting_with_preamble_words_are_kept() {
    let raw = "Sure, here are the rows:\nCSV,Comma separated values,Text,2024-01-01\nFormat_A,450,0.2,Nevada\nSure,12,0.5,Ohio";
    let parsed = ResponseParser::default().parse_table(raw, 4, false);

    assert_eq!(parsed.rows.len(), 3);
    assert_eq!(parsed.rows[0][0], "CSV");
    assert_eq!(parsed.rows[1][0], "Format_A");
    assert_eq!(parsed.rows[2], vec!["Sure", "12", "0.5", "Ohio"]);
    assert_eq!(parsed.rejected, 1);
}

#[test]
fn test_quoted_commas_stay_in_one_cell() {
    let raw = r#""Berlin, DE",450,"He said ""hi""""#;
    let parsed = ResponseParser::default().parse_table(raw, 3, false);

    assert_eq!(parsed.rows[0], vec!["Berlin, DE", "450", "He said \"hi\""]);
}

#[test]
fn test_markdown_table_lines() {
    let raw = "| Source | MW |\n|---|---|\n| Solar | 450 |";
    let parsed = ResponseParser::default().parse_table(raw, 2, false);

    assert_eq!(parsed.rows.len(), 2);
    assert_eq!(parsed.rows[1], vec!["Solar", "450"]);
    assert_eq!(parsed.rejected, 1);
}

#[test]
fn test_required_header_is_captured() {
    let raw = "Energy_Source,Capacity_MW\nSolar,450";
    let parsed = ResponseParser::default().parse_table(raw, 2, true);

    assert_eq!(
        parsed.header,
        Some(vec!["Energy_Source".to_string(), "Capacity_MW".to_string()])
    );
    assert_eq!(parsed.rows, vec![vec!["Solar", "450"]]);
}

#[test]
fn test_blank_table_is_invalid() {
    let parsed = ResponseParser::default().parse_table("\n  \n", 3, false);

    assert!(!parsed.valid);
    assert_eq!(parsed.rejected, 0);
}

#[test]
fn test_document_markers_are_stripped() {
    let raw = "## Market Overview\n\n- **Solar** capacity grew quickly across many regions of the world.\n";
    let parsed = ResponseParser::default().parse_document(raw);

    assert!(parsed.valid);
    assert_eq!(
        parsed.paragraphs,
        vec!["Solar capacity grew quickly across many regions of the world."]
    );
}

#[test]
fn test_document_block_lines_are_joined() {
    let raw = "Storage costs fell sharply over the decade\nas lithium supply chains matured.\n\nA second paragraph that is comfortably long enough to keep.";
    let parsed = ResponseParser::default().parse_document(raw);

    assert_eq!(parsed.paragraphs.len(), 2);
    assert_eq!(
        parsed.paragraphs[0],
        "Storage costs fell sharply over the decade as lithium supply chains matured."
    );
}

#[test]
fn test_document_echo_lines_are_dropped() {
    let raw = "Topic: solar\nThis is section 2 of 8\n\nGrid operators adapted storage to smooth the daily output curve.";
    let parsed = ResponseParser::default().parse_document(raw);

    assert_eq!(
        parsed.paragraphs,
        vec!["Grid operators adapted storage to smooth the daily output curve."]
    );
}

#[test]
fn test_fenced_document_keeps_prose() {
    let raw = "```markdown\nSolar deployment across the region accelerated as module prices fell.\n\nGrid operators adapted storage to smooth the daily output curve.\n```";
    let parsed = ResponseParser::default().parse_document(raw);

    assert!(parsed.valid);
    assert_eq!(
        parsed.paragraphs,
        vec![
            "Solar deployment across the region accelerated as module prices fell.",
            "Grid operators adapted storage to smooth the daily output curve.",
        ]
    );
}

#[test]
fn test_long_heading_is_not_a_paragraph() {
    let raw = "## Regional Deployment Trends and Grid Integration Outlook\nStorage costs fell sharply over the decade as supply chains matured.";
    let parsed = ResponseParser::default().parse_document(raw);

    assert_eq!(
        parsed.paragraphs,
        vec!["Storage costs fell sharply over the decade as supply chains matured."]
    );
}

#[test]
fn test_min_paragraph_chars_is_configurable() {
    let raw = "Short one.\n\nAnother.";

    assert!(!ResponseParser::default().parse_document(raw).valid);

    let lenient = ResponseParser::new(ParserConfig::new(5, 1));
    assert_eq!(lenient.parse_document(raw).paragraphs.len(), 2);
}
