//! Synthetic document and dataset generation.
//!
//! This crate re-exports the workspace crates under one roof and adds the
//! layered configuration loader and output renderers used by the `synthgen`
//! binary.
//!
//! # Example
//!
//! ```no_run
//! use synthgen::{
//!     GenerationOrchestrator, GenerationRequest, ModelConfig, OllamaClient, OutputFormat,
//!     PipelineConfig, render,
//! };
//!
//! # async fn example() -> synthgen::SynthgenResult<()> {
//! let client = OllamaClient::new(ModelConfig::default())?;
//! let pipeline = PipelineConfig::default();
//! let request = GenerationRequest::dataset("renewable energy", 100, 5);
//!
//! let result = GenerationOrchestrator::new(&client, &pipeline)
//!     .generate(&request)
//!     .await?;
//! println!("{}", render(result.content(), OutputFormat::Csv)?);
//! # Ok(())
//! # }
//! ```

mod config;
mod render;

pub use config::{AppConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use render::{
    OutputFormat, render, render_document_markdown, render_document_text, render_json,
    render_table_csv, write_output,
};

pub use synthgen_core::{
    ContentKind, DEFAULT_SUBJECT, DocType, DocumentContent, GenerationRequest, GenerationResult,
    RawResponse, ResponseErrorKind, Section, StructuredContent, TableContent, UnitStats,
};
pub use synthgen_error::{
    ConfigError, HttpError, ModelError, ModelErrorKind, RenderError, RenderErrorKind,
    SynthgenError, SynthgenErrorKind, SynthgenResult,
};
pub use synthgen_interface::ModelClient;
pub use synthgen_models::{ModelConfig, OllamaClient};
pub use synthgen_pipeline::{FallbackSynthesizer, GenerationOrchestrator, PipelineConfig};
