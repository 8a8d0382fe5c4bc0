//! Endpoint configuration for model clients.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default local Ollama endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model name.
pub const DEFAULT_MODEL: &str = "mistral";

/// Connection and decoding settings for the local generation endpoint.
///
/// Passed explicitly to the client constructor; there is no process-wide
/// endpoint state.
///
/// # Examples
///
/// ```
/// use synthgen_models::ModelConfig;
///
/// let config = ModelConfig::builder()
///     .base_url("http://127.0.0.1:9000")
///     .timeout_secs(5u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "mistral");
/// assert_eq!(config.timeout().as_secs(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL of the endpoint (without the `/api/generate` path)
    base_url: String,
    /// Model identifier
    model: String,
    /// Bounded wait for one call, in seconds
    timeout_secs: u64,
    /// Nucleus sampling probability
    top_p: f32,
    /// Penalty applied to repeated tokens
    repeat_penalty: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 120,
            top_p: 0.9,
            repeat_penalty: 1.1,
        }
    }
}

impl ModelConfig {
    /// Returns a builder for constructing a ModelConfig.
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }

    /// The per-call timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the generation route.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }

    /// Returns a copy pointing at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns a copy using a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
