//! Request driver: plan units, generate each, merge the results.
//!
//! Model and parse failures never escape a unit. Each unit gets at most
//! [`PipelineConfig::attempt_limit`] model calls and then degrades to
//! placeholder content, so a request with a valid shape always completes.

use crate::fallback::FallbackSynthesizer;
use crate::headers::derive_headers;
use crate::parser::{ResponseParser, is_header_echo};
use crate::plan::{GenerationUnit, RowBatch, SectionUnit, plan_row_batches, plan_sections};
use crate::prompt::{build_row_batch_prompt, build_section_prompt, with_retry_hint};
use crate::summary::summarize_section;
use crate::PipelineConfig;
use futures::stream::{self, StreamExt};
use synthgen_core::{
    DocType, DocumentContent, DocumentShape, GenerationRequest, GenerationResult, RequestShape,
    Section, StructuredContent, TableContent, TableShape, UnitStats,
};
use synthgen_error::SynthgenResult;
use synthgen_interface::ModelClient;
use tracing::{debug, info, instrument, warn};

/// Notice appended to every generated document.
pub const DISCLAIMER: &str = "This document has been synthetically generated using AI for \
    demonstration purposes. All content, data, recommendations, and analysis are artificially \
    created and should not be used for actual business decisions, implementation, or as factual \
    reference material. Please consult appropriate experts and conduct proper research for \
    real-world applications.";

/// Lifecycle of a request, logged at every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrchestratorState {
    /// Validating the request and deriving units
    Planning,
    /// Issuing a model call for a unit
    Generating,
    /// A response was received but held nothing usable
    ParseFail,
    /// Substituting placeholder content for a unit
    Fallback,
    /// Assembling unit outputs
    Merging,
    /// Finished
    Done,
}

/// Outcome of one unit before merging.
struct UnitOutcome<T> {
    output: T,
    stats: UnitStats,
}

/// Drives one generation request to completion.
///
/// One instance serves one request and is consumed by
/// [`generate`](Self::generate).
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use synthgen_core::{GenerationRequest, RawResponse, ResponseErrorKind};
/// use synthgen_interface::ModelClient;
/// use synthgen_pipeline::{GenerationOrchestrator, PipelineConfig};
///
/// struct Offline;
///
/// #[async_trait]
/// impl ModelClient for Offline {
///     async fn generate(&self, _: &str, _: u32, _: f32) -> RawResponse {
///         RawResponse::failure(ResponseErrorKind::Connection)
///     }
///     fn provider_name(&self) -> &'static str { "offline" }
///     fn model_name(&self) -> &str { "none" }
/// }
///
/// # futures::executor::block_on(async {
/// let config = PipelineConfig::default();
/// let request = GenerationRequest::dataset("finance", 10, 3);
/// let result = GenerationOrchestrator::new(&Offline, &config)
///     .generate(&request)
///     .await
///     .unwrap();
/// assert_eq!(result.content().as_table().unwrap().rows().len(), 10);
/// assert_eq!(result.fallback_count(), 1);
/// # });
/// ```
pub struct GenerationOrchestrator<'a, C: ModelClient + ?Sized> {
    client: &'a C,
    config: &'a PipelineConfig,
    parser: ResponseParser,
}

impl<'a, C: ModelClient + ?Sized> GenerationOrchestrator<'a, C> {
    /// Creates an orchestrator over a model client.
    pub fn new(client: &'a C, config: &'a PipelineConfig) -> Self {
        Self {
            client,
            config,
            parser: ResponseParser::new(config.parser_config()),
        }
    }

    /// Generates the content a request describes.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the request shape cannot produce any
    /// content. Model and parse failures are absorbed per unit.
    #[instrument(
        skip(self, request),
        fields(
            subject = %request.subject(),
            kind = %request.kind(),
            provider = self.client.provider_name(),
            model = self.client.model_name(),
        )
    )]
    pub async fn generate(self, request: &GenerationRequest) -> SynthgenResult<GenerationResult> {
        self.transition(OrchestratorState::Planning, "request");
        request.validate()?;
        info!("Starting generation");

        let result = match request.shape() {
            RequestShape::Document(shape) => self.generate_document(request.subject(), shape).await,
            RequestShape::Dataset(shape) => self.generate_table(request.subject(), shape).await,
        };

        self.transition(OrchestratorState::Done, "request");
        info!(
            units = result.unit_stats().len(),
            attempts = result.total_attempts(),
            fallbacks = result.fallback_count(),
            "Generation complete"
        );
        Ok(result)
    }

    async fn generate_document(&self, subject: &str, shape: &DocumentShape) -> GenerationResult {
        let doc_type = *shape.doc_type();
        let plan = plan_sections(doc_type, *shape.page_count());
        let fallback = FallbackSynthesizer::new(subject);

        let mut summaries = Vec::with_capacity(plan.len());
        let mut sections = Vec::with_capacity(plan.len());
        let mut unit_stats = Vec::with_capacity(plan.len());

        for unit in &plan {
            let outcome = self
                .generate_section(subject, doc_type, unit, &summaries, &fallback)
                .await;
            summaries.push(summarize_section(&outcome.output));
            sections.push(outcome.output);
            unit_stats.push(outcome.stats);
        }

        self.transition(OrchestratorState::Merging, "document");
        let title = format!("{}: {}", doc_type.title(), subject);
        let document = DocumentContent::new(title, sections, DISCLAIMER);
        debug!(
            sections = document.sections().len(),
            words = document.word_count(),
            "Merged document"
        );
        GenerationResult::new(StructuredContent::Document(document), unit_stats)
    }

    async fn generate_section(
        &self,
        subject: &str,
        doc_type: DocType,
        unit: &SectionUnit,
        summaries: &[String],
        fallback: &FallbackSynthesizer,
    ) -> UnitOutcome<Section> {
        let label = GenerationUnit::Section(*unit).label();
        let name = unit.template.name;
        let base_prompt = build_section_prompt(subject, doc_type, name, summaries, unit.targets);
        let mut prompt = base_prompt.clone();
        let mut attempts = 0;

        while attempts < self.config.attempt_limit() {
            attempts += 1;
            self.transition(OrchestratorState::Generating, &label);

            let response = self
                .client
                .generate(
                    &prompt,
                    *self.config.section_max_tokens(),
                    *self.config.temperature(),
                )
                .await;

            let reason = match response.error_kind() {
                Some(kind) => {
                    warn!(unit = %label, attempt = attempts, error_kind = %kind, "Model call failed");
                    format!("model call failed: {}", kind)
                }
                None => {
                    let parsed = self.parser.parse_document(response.text());
                    if parsed.valid {
                        debug!(
                            unit = %label,
                            attempt = attempts,
                            paragraphs = parsed.paragraphs.len(),
                            "Section accepted"
                        );
                        return UnitOutcome {
                            output: Section::new(name, parsed.paragraphs),
                            stats: UnitStats::new(label, attempts, true, false),
                        };
                    }
                    self.transition(OrchestratorState::ParseFail, &label);
                    "no usable paragraphs were found".to_string()
                }
            };
            prompt = with_retry_hint(&base_prompt, &reason);
        }

        self.transition(OrchestratorState::Fallback, &label);
        warn!(unit = %label, attempts, "Using placeholder section");
        UnitOutcome {
            output: fallback.placeholder_section(doc_type, name, unit.targets.paragraphs),
            stats: UnitStats::new(label, attempts, false, true),
        }
    }

    async fn generate_table(&self, subject: &str, shape: &TableShape) -> GenerationResult {
        let headers = derive_headers(subject, *shape.column_count());
        let plan = plan_row_batches(*shape.row_count(), self.config.batch_row_limit());
        let fallback = FallbackSynthesizer::new(subject);
        let concurrency = (*self.config.batch_concurrency()).max(1);
        debug!(batches = plan.len(), concurrency, "Generating row batches");

        let outcomes: Vec<UnitOutcome<Vec<Vec<String>>>> = stream::iter(plan)
            .map(|batch| self.generate_batch(subject, &headers, batch, &fallback))
            .buffered(concurrency)
            .collect()
            .await;

        self.transition(OrchestratorState::Merging, "table");
        let mut rows = Vec::with_capacity(*shape.row_count());
        let mut unit_stats = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            rows.extend(outcome.output);
            unit_stats.push(outcome.stats);
        }

        debug!(rows = rows.len(), columns = headers.len(), "Merged table");
        let table = TableContent::new(headers, rows);
        GenerationResult::new(StructuredContent::Table(table), unit_stats)
    }

    async fn generate_batch(
        &self,
        subject: &str,
        headers: &[String],
        batch: RowBatch,
        fallback: &FallbackSynthesizer,
    ) -> UnitOutcome<Vec<Vec<String>>> {
        let label = GenerationUnit::RowBatch(batch).label();
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(batch.size);
        let mut reason: Option<String> = None;
        let mut attempts = 0;

        while attempts < self.config.attempt_limit() && rows.len() < batch.size {
            attempts += 1;
            self.transition(OrchestratorState::Generating, &label);

            let shortfall = batch.size - rows.len();
            let base_prompt = build_row_batch_prompt(subject, headers, shortfall);
            let prompt = match &reason {
                Some(reason) => with_retry_hint(&base_prompt, reason),
                None => base_prompt,
            };

            let response = self
                .client
                .generate(
                    &prompt,
                    *self.config.batch_max_tokens(),
                    *self.config.temperature(),
                )
                .await;

            if let Some(kind) = response.error_kind() {
                warn!(unit = %label, attempt = attempts, error_kind = %kind, "Model call failed");
                reason = Some(format!("model call failed: {}", kind));
                continue;
            }

            let parsed = self
                .parser
                .parse_table(response.text(), headers.len(), false);
            let before = rows.len();
            for mut row in parsed.rows {
                if rows.len() == batch.size {
                    break;
                }
                if is_header_echo(&row, headers) {
                    debug!(unit = %label, "Dropping header echo");
                    continue;
                }
                let row_number = batch.offset + rows.len() + 1;
                for (column, (cell, header)) in row.iter_mut().zip(headers).enumerate() {
                    if cell.is_empty() {
                        *cell = fallback.placeholder_cell(header, column, row_number);
                    }
                }
                rows.push(row);
            }

            let accepted = rows.len() - before;
            debug!(
                unit = %label,
                attempt = attempts,
                accepted,
                rejected = parsed.rejected,
                rows = rows.len(),
                "Parsed row batch"
            );

            if accepted == 0 {
                self.transition(OrchestratorState::ParseFail, &label);
                reason = Some("no valid rows were found".to_string());
            } else if rows.len() < batch.size {
                reason = Some(format!(
                    "only {} of {} rows had {} comma-separated values",
                    accepted,
                    shortfall,
                    headers.len()
                ));
            }
        }

        let succeeded = !rows.is_empty();
        let missing = batch.size - rows.len();
        if missing > 0 {
            self.transition(OrchestratorState::Fallback, &label);
            warn!(unit = %label, attempts, missing, "Filling row batch with placeholder rows");
            rows.extend(fallback.placeholder_rows(headers, batch.offset + rows.len(), missing));
        }

        UnitOutcome {
            output: rows,
            stats: UnitStats::new(label, attempts, succeeded, missing > 0),
        }
    }

    fn transition(&self, state: OrchestratorState, unit: &str) {
        debug!(state = %state, unit, "State transition");
    }
}
