//! Data transfer objects for the Ollama generate API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Decoding options sent with each request.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
pub struct GenerateOptions {
    /// Maximum tokens to predict
    num_predict: u32,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling probability
    top_p: f32,
    /// Repetition penalty
    repeat_penalty: f32,
}

impl GenerateOptions {
    /// Creates a new builder for GenerateOptions.
    pub fn builder() -> GenerateOptionsBuilder {
        GenerateOptionsBuilder::default()
    }
}

/// Non-streaming generate request.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateBody {
    /// Model identifier
    model: String,
    /// Prompt text
    prompt: String,
    /// Always false; the client reads one complete body
    #[builder(default)]
    stream: bool,
    /// Decoding options
    options: GenerateOptions,
}

impl GenerateBody {
    /// Creates a new builder for GenerateBody.
    pub fn builder() -> GenerateBodyBuilder {
        GenerateBodyBuilder::default()
    }
}

/// Generate response. Only the text is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateReply {
    /// Generated text
    #[serde(default)]
    pub response: String,
    /// Whether the model finished
    #[serde(default)]
    pub done: bool,
    /// Tokens produced, when reported
    #[serde(default)]
    pub eval_count: Option<u64>,
}
