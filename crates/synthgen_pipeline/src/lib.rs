//! Generation pipeline for synthgen.
//!
//! Planning turns a request into units (document sections or row batches).
//! Each unit is prompted, sent through a [`ModelClient`](synthgen_interface::ModelClient),
//! parsed, retried within a bounded budget, and replaced with deterministic
//! placeholder content when nothing usable comes back.
//! [`GenerationOrchestrator`] drives the whole flow.

mod config;
mod fallback;
mod headers;
mod orchestrator;
mod parser;
mod plan;
mod prompt;
mod sections;
mod summary;

pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use fallback::{ColumnKind, FallbackSynthesizer, PLACEHOLDER_LABEL};
pub use headers::derive_headers;
pub use orchestrator::{DISCLAIMER, GenerationOrchestrator, OrchestratorState};
pub use parser::{ParsedDocument, ParsedTable, ParserConfig, ResponseParser, is_header_echo};
pub use plan::{
    GenerationUnit, MAX_SECTION_PARAGRAPHS, MIN_SECTION_PARAGRAPHS, PARAGRAPHS_PER_PAGE, RowBatch,
    SectionTargets, SectionUnit, WORDS_PER_PAGE, paragraphs_per_section, plan_row_batches,
    plan_sections,
};
pub use prompt::{
    MAX_PRIOR_SUMMARIES, MAX_SUMMARY_CHARS, build_row_batch_prompt, build_section_prompt,
    with_retry_hint,
};
pub use sections::{SectionTemplate, section_instruction, section_templates};
pub use summary::summarize_section;
