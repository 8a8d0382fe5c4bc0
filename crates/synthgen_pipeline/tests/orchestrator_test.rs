use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use synthgen_core::{
    DocType, GenerationRequest, RawResponse, ResponseErrorKind, StructuredContent,
};
use synthgen_error::SynthgenErrorKind;
use synthgen_interface::ModelClient;
use synthgen_pipeline::{
    DISCLAIMER, GenerationOrchestrator, PLACEHOLDER_LABEL, PipelineConfig, section_templates,
};

const PARAGRAPH: &str = "Solar deployment across the region accelerated as module prices fell. \
Grid operators adapted storage to smooth output. Policy support remained steady.";

/// Mock client that replays scripted responses, then repeats a default.
struct ScriptedClient {
    script: Mutex<VecDeque<RawResponse>>,
    default: RawResponse,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(script: Vec<RawResponse>, default: RawResponse) -> Self {
        Self {
            script: Mutex::new(script.into()),
            default,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn always(default: RawResponse) -> Self {
        Self::new(Vec::new(), default)
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn generate(&self, prompt: &str, _max_tokens: u32, _temperature: f32) -> RawResponse {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default.clone())
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-v1"
    }
}

fn expect_table(content: &StructuredContent) -> &synthgen_core::TableContent {
    content.as_table().expect("expected a table")
}

#[tokio::test]
async fn test_all_timeouts_fall_back_for_every_section() {
    let client = ScriptedClient::always(RawResponse::failure(ResponseErrorKind::Timeout));
    let config = PipelineConfig::default();
    let request = GenerationRequest::document("supply chains", DocType::Report, 5);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let document = result.content().as_document().expect("expected a document");
    assert_eq!(document.sections().len(), 8);
    assert_eq!(result.unit_stats().len(), 8);
    assert!(result.unit_stats().iter().all(|s| *s.used_fallback()));
    assert!(result.unit_stats().iter().all(|s| !*s.succeeded()));
    assert!(result.unit_stats().iter().all(|s| *s.attempts() == 2));
    assert_eq!(client.prompts().len(), 16);

    for section in document.sections() {
        assert!(!section.paragraphs().is_empty());
        assert!(section.paragraphs()[0].starts_with(PLACEHOLDER_LABEL));
    }
}

#[tokio::test]
async fn test_all_timeouts_fill_every_row() {
    let client = ScriptedClient::always(RawResponse::failure(ResponseErrorKind::Timeout));
    let config = PipelineConfig::default();
    let request = GenerationRequest::dataset("renewable energy", 120, 4);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let table = expect_table(result.content());
    assert_eq!(table.rows().len(), 120);
    assert!(table.rows().iter().all(|row| row.len() == 4));
    assert_eq!(result.unit_stats().len(), 3);
    assert_eq!(result.fallback_count(), 3);
}

#[tokio::test]
async fn test_renewable_energy_dataset_shape() {
    let rows: Vec<String> = (1..=10)
        .map(|i| format!("Solar,{},0.{},Nevada", 100 + i, 10 + i))
        .collect();
    let client = ScriptedClient::always(RawResponse::success(rows.join("\n")));
    let config = PipelineConfig::default();
    let request = GenerationRequest::dataset("renewable energy", 10, 4);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let table = expect_table(result.content());
    assert_eq!(
        table.headers(),
        &vec!["Energy_Source", "Capacity_MW", "Efficiency_Rate", "Location"]
    );
    assert_eq!(table.rows().len(), 10);
    assert!(table.rows().iter().all(|row| row.len() == 4));
    assert_eq!(table.rows()[0], vec!["Solar", "101", "0.11", "Nevada"]);
    assert_eq!(result.fallback_count(), 0);
    assert_eq!(result.total_attempts(), 1);
}

#[tokio::test]
async fn test_short_row_is_replaced_by_fallback() {
    let client = ScriptedClient::always(RawResponse::success("Solar,450"));
    let config = PipelineConfig::builder().max_attempts(1u32).build().unwrap();
    let request = GenerationRequest::dataset("renewable energy", 1, 4);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let table = expect_table(result.content());
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0][0], "Renewable_Energy_Sample_1");
    assert!(table.rows()[0][2].ends_with('%'));
    assert_eq!(table.rows()[0][3], "Renewable_Energy_Sample_1");

    let stats = &result.unit_stats()[0];
    assert!(*stats.used_fallback());
    assert!(!*stats.succeeded());
    assert_eq!(*stats.attempts(), 1);
}

#[tokio::test]
async fn test_retry_requests_only_the_shortfall() {
    let client = ScriptedClient::new(
        vec![
            RawResponse::success("TX-1,100,USD\nTX-2,200,EUR\nTX-3,300,GBP"),
            RawResponse::success("TX-4,400,USD\nTX-5,500,JPY"),
        ],
        RawResponse::failure(ResponseErrorKind::Connection),
    );
    let config = PipelineConfig::default();
    let request = GenerationRequest::dataset("finance", 5, 3);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Create exactly 5 rows"));
    assert!(prompts[1].contains("Create exactly 2 rows"));
    assert!(prompts[1].contains("previous answer was rejected"));

    let table = expect_table(result.content());
    let ids: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["TX-1", "TX-2", "TX-3", "TX-4", "TX-5"]);

    let stats = &result.unit_stats()[0];
    assert_eq!(*stats.attempts(), 2);
    assert!(*stats.succeeded());
    assert!(!*stats.used_fallback());
}

#[tokio::test]
async fn test_header_echo_dropped_and_blank_cells_filled() {
    let client = ScriptedClient::always(RawResponse::success(
        "Transaction_ID,Amount,Currency\nTX-1,,USD\nTX-2,20,EUR",
    ));
    let config = PipelineConfig::default();
    let request = GenerationRequest::dataset("finance", 2, 3);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let table = expect_table(result.content());
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows()[0][0], "TX-1");
    assert!(!table.rows()[0][1].is_empty());
    assert_eq!(table.rows()[1], vec!["TX-2", "20", "EUR"]);
    assert_eq!(result.fallback_count(), 0);
}

#[tokio::test]
async fn test_partial_batch_topped_up_with_fallback() {
    let client = ScriptedClient::always(RawResponse::success("TX-1,100,USD"));
    let config = PipelineConfig::default();
    let request = GenerationRequest::dataset("finance", 3, 3);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let table = expect_table(result.content());
    assert_eq!(table.rows().len(), 3);
    assert_eq!(table.rows()[0][0], "TX-1");
    assert_eq!(table.rows()[1][0], "TX-1");
    assert_eq!(table.rows()[2][0], "3");

    let stats = &result.unit_stats()[0];
    assert!(*stats.succeeded());
    assert!(*stats.used_fallback());
}

#[tokio::test]
async fn test_concurrent_batches_keep_plan_order() {
    let client = ScriptedClient::always(RawResponse::failure(ResponseErrorKind::Empty));
    let config = PipelineConfig::builder()
        .rows_per_batch(2usize)
        .batch_concurrency(3usize)
        .build()
        .unwrap();
    let request = GenerationRequest::dataset("finance", 7, 3);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let table = expect_table(result.content());
    let ids: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7"]);

    let labels: Vec<&str> = result.unit_stats().iter().map(|s| s.label().as_str()).collect();
    assert_eq!(labels, vec!["rows 1-2", "rows 3-4", "rows 5-6", "rows 7-7"]);
}

#[tokio::test]
async fn test_document_sections_follow_template() {
    let client = ScriptedClient::always(RawResponse::success(PARAGRAPH));
    let config = PipelineConfig::default();
    let request = GenerationRequest::document("solar power", DocType::Report, 5);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let document = result.content().as_document().expect("expected a document");
    let headings: Vec<&str> = document.sections().iter().map(|s| s.heading().as_str()).collect();
    let expected: Vec<&str> = section_templates(DocType::Report).iter().map(|t| t.name).collect();
    assert_eq!(headings, expected);
    assert_eq!(document.title(), "Report: solar power");
    assert_eq!(document.disclaimer(), DISCLAIMER);
    assert_eq!(result.fallback_count(), 0);

    let prompts = client.prompts();
    assert!(!prompts[0].contains("Earlier sections covered"));
    assert!(prompts[2].contains("Earlier sections covered"));
    assert!(prompts[2].contains("Executive Summary: Solar deployment"));
}

#[tokio::test]
async fn test_section_retried_after_unusable_response() {
    let client = ScriptedClient::new(
        vec![RawResponse::success("```\nnot prose\n```")],
        RawResponse::success(PARAGRAPH),
    );
    let config = PipelineConfig::default();
    let request = GenerationRequest::document("solar power", DocType::Article, 2);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let first = &result.unit_stats()[0];
    assert_eq!(*first.attempts(), 2);
    assert!(*first.succeeded());
    assert!(!*first.used_fallback());
    assert!(client.prompts()[1].contains("no usable paragraphs"));
    assert_eq!(result.fallback_count(), 0);
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_any_call() {
    let client = ScriptedClient::always(RawResponse::success(PARAGRAPH));
    let config = PipelineConfig::default();
    let request = GenerationRequest::dataset("finance", 0, 3);

    let err = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect_err("zero rows should be rejected");

    assert!(matches!(err.kind(), SynthgenErrorKind::Config(_)));
    assert!(client.prompts().is_empty());
}

#[tokio::test]
async fn test_single_attempt_limit_is_respected() {
    let client = ScriptedClient::always(RawResponse::failure(ResponseErrorKind::Connection));
    let config = PipelineConfig::builder().max_attempts(0u32).build().unwrap();
    let request = GenerationRequest::document("solar power", DocType::Design, 1);

    let result = GenerationOrchestrator::new(&client, &config)
        .generate(&request)
        .await
        .expect("generation should not fail");

    let sections = section_templates(DocType::Design).len();
    assert_eq!(client.prompts().len(), sections);
    assert_eq!(result.fallback_count(), sections);
}
