//! Tests for request validation and content invariants.

use synthgen_core::{
    ContentKind, DocType, GenerationRequest, RawResponse, RequestShape, ResponseErrorKind,
    Section, StructuredContent, TableContent, UnitStats,
};

#[test]
fn test_document_request_kind_and_shape() {
    let request = GenerationRequest::document("data governance", DocType::Proposal, 7);

    assert_eq!(request.kind(), ContentKind::Document);
    match request.shape() {
        RequestShape::Document(shape) => {
            assert_eq!(*shape.doc_type(), DocType::Proposal);
            assert_eq!(*shape.page_count(), 7);
        }
        RequestShape::Dataset(_) => panic!("expected document shape"),
    }
}

#[test]
fn test_subject_is_trimmed() {
    let request = GenerationRequest::dataset("  healthcare  ", 20, 5);
    assert_eq!(request.subject(), "healthcare");
}

#[test]
fn test_zero_columns_rejected() {
    let request = GenerationRequest::dataset("finance", 10, 0);
    let err = request.validate().unwrap_err();
    assert!(err.message.contains("column count"));
}

#[test]
fn test_zero_rows_rejected() {
    let request = GenerationRequest::dataset("finance", 0, 5);
    assert!(request.validate().is_err());
}

#[test]
fn test_zero_pages_rejected() {
    let request = GenerationRequest::document("finance", DocType::Article, 0);
    assert!(request.validate().is_err());
}

#[test]
fn test_upper_bounds_not_revalidated() {
    let request = GenerationRequest::dataset("finance", 5000, 150);
    assert!(request.validate().is_ok());
}

#[test]
fn test_doc_type_parsing_is_case_insensitive() {
    assert_eq!("Whitepaper".parse::<DocType>().unwrap(), DocType::Whitepaper);
    assert_eq!("DESIGN".parse::<DocType>().unwrap(), DocType::Design);
    assert!("memo".parse::<DocType>().is_err());
}

#[test]
fn test_raw_response_failure_has_no_text() {
    let response = RawResponse::failure(ResponseErrorKind::Timeout);
    assert!(!response.succeeded());
    assert_eq!(response.text(), "");
    assert_eq!(response.error_kind(), Some(ResponseErrorKind::Timeout));
}

#[test]
fn test_table_rows_normalized_to_header_width() {
    let table = TableContent::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![
            vec!["1".into()],
            vec!["1".into(), "2".into(), "3".into(), "4".into()],
        ],
    );

    assert!(table.rows().iter().all(|row| row.len() == 3));
    assert_eq!(table.rows()[0][2], "");
    assert_eq!(table.rows()[1][2], "3");
}

#[test]
fn test_section_word_count() {
    let section = Section::new(
        "Introduction",
        vec!["one two three".into(), "four five".into()],
    );
    assert_eq!(section.word_count(), 5);
}

#[test]
fn test_structured_content_serializes_with_kind_tag() {
    let content = StructuredContent::from(TableContent::new(
        vec!["ID".into()],
        vec![vec!["1".into()]],
    ));
    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json["kind"], "table");
    assert_eq!(json["content"]["headers"][0], "ID");
}

#[test]
fn test_unit_stats_builder() {
    let stats = UnitStats::builder()
        .label("rows 1-50")
        .attempts(2u32)
        .succeeded(false)
        .used_fallback(true)
        .build()
        .unwrap();

    assert_eq!(stats.label(), "rows 1-50");
    assert!(*stats.used_fallback());
}

#[test]
fn test_deserialized_request_normalises_subject() {
    let json = r#"{"subject":"   ","shape":{"kind":"dataset","row_count":10,"column_count":4}}"#;
    let request: GenerationRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.subject(), "general topics");
    assert_eq!(request.kind(), ContentKind::Dataset);
}

#[test]
fn test_deserialized_blank_success_becomes_empty_failure() {
    let blank: RawResponse = serde_json::from_str(r#"{"text":"  ","error_kind":null}"#).unwrap();
    assert_eq!(blank.error_kind(), Some(ResponseErrorKind::Empty));

    let failed: RawResponse =
        serde_json::from_str(r#"{"text":"leftover","error_kind":"TIMEOUT"}"#).unwrap();
    assert_eq!(failed.error_kind(), Some(ResponseErrorKind::Timeout));
    assert_eq!(failed.text(), "");

    let ok = RawResponse::success("Solar,450");
    let decoded: RawResponse = serde_json::from_str(&serde_json::to_string(&ok).unwrap()).unwrap();
    assert_eq!(decoded, ok);
}
