use std::collections::HashSet;
use strum::IntoEnumIterator;
use synthgen_core::DocType;
use synthgen_pipeline::{
    GenerationUnit, MAX_SECTION_PARAGRAPHS, derive_headers, paragraphs_per_section,
    plan_row_batches, plan_sections, section_templates,
};

#[test]
fn test_report_plan_has_eight_sections_at_any_length() {
    for pages in [1, 5, 20, 50] {
        let plan = plan_sections(DocType::Report, pages);
        assert_eq!(plan.len(), 8);
        let positions: Vec<usize> = plan.iter().map(|u| u.targets.position).collect();
        assert_eq!(positions, (1..=8).collect::<Vec<_>>());
    }
}

#[test]
fn test_paragraph_targets_scale_within_bounds() {
    let short = plan_sections(DocType::Report, 5)[0].targets;
    let long = plan_sections(DocType::Report, 20)[0].targets;
    let longest = plan_sections(DocType::Report, 50)[0].targets;

    assert_eq!(short.paragraphs, 2);
    assert_eq!(long.paragraphs, 8);
    assert_eq!(longest.paragraphs, MAX_SECTION_PARAGRAPHS);
    assert!(long.words > short.words);
    assert_eq!(paragraphs_per_section(1, 9), 1);
}

#[test]
fn test_every_doc_type_has_unique_section_names() {
    for doc_type in DocType::iter() {
        let templates = section_templates(doc_type);
        assert!(!templates.is_empty());

        let names: HashSet<&str> = templates.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), templates.len(), "duplicate section in {doc_type}");
    }
}

#[test]
fn test_row_batches_cover_rows_exactly() {
    let batches = plan_row_batches(2000, 50);
    assert_eq!(batches.len(), 40);
    assert_eq!(batches.iter().map(|b| b.size).sum::<usize>(), 2000);

    let batches = plan_row_batches(10, 50);
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].size, 10);
}

#[test]
fn test_row_batch_labels() {
    let batches = plan_row_batches(100, 50);

    assert_eq!(batches[1].label(), "rows 51-100");
    assert_eq!(GenerationUnit::RowBatch(batches[0]).label(), "rows 1-50");
}

#[test]
fn test_section_unit_label() {
    let plan = plan_sections(DocType::Report, 3);

    assert_eq!(
        GenerationUnit::Section(plan[0]).label(),
        "section 1: Executive Summary"
    );
}

#[test]
fn test_renewable_energy_headers() {
    let headers = derive_headers("renewable energy", 4);

    assert_eq!(
        headers,
        vec!["Energy_Source", "Capacity_MW", "Efficiency_Rate", "Location"]
    );
}

#[test]
fn test_unknown_subject_uses_generic_headers() {
    let headers = derive_headers("urban planning", 3);

    assert_eq!(headers, vec!["ID", "Name", "Value"]);
}

#[test]
fn test_wide_tables_get_unique_headers() {
    let headers = derive_headers("healthcare", 100);
    let unique: HashSet<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    assert_eq!(headers.len(), 100);
    assert_eq!(unique.len(), 100);
    assert_eq!(headers[99], "Field_100");
}
