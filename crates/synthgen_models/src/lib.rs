//! Local model endpoint clients for synthgen.
//!
//! Provides [`OllamaClient`], the HTTP implementation of
//! [`synthgen_interface::ModelClient`], and the explicit [`ModelConfig`] it is
//! constructed from.

mod config;
mod ollama;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, ModelConfig, ModelConfigBuilder};
pub use ollama::{GenerateBody, GenerateOptions, GenerateReply, OllamaClient};
