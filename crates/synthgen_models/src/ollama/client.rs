//! HTTP client for a local Ollama endpoint.

use crate::ModelConfig;
use crate::ollama::{GenerateBody, GenerateOptions, GenerateReply};
use async_trait::async_trait;
use reqwest::Client;
use synthgen_core::{RawResponse, ResponseErrorKind};
use synthgen_error::{HttpError, ModelError, ModelErrorKind, SynthgenResult};
use synthgen_interface::ModelClient;
use tracing::{debug, error, instrument, warn};

/// Client for the Ollama `/api/generate` route.
///
/// One `reqwest::Client` is built per instance and reused across calls.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    config: ModelConfig,
}

impl OllamaClient {
    /// Creates a client for the given endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip(config), fields(model = %config.model(), url = %config.base_url()))]
    pub fn new(config: ModelConfig) -> SynthgenResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HttpError::new(config.base_url().as_str(), e.to_string()))?;

        debug!(
            model = %config.model(),
            url = %config.generate_url(),
            timeout_secs = config.timeout_secs(),
            "Created Ollama client"
        );

        Ok(Self { client, config })
    }

    /// Creates a client for the default local endpoint and model.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn localhost() -> SynthgenResult<Self> {
        Self::new(ModelConfig::default())
    }

    /// Returns the endpoint configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Issues one request and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] on timeout, transport failure, non-success
    /// status, undecodable body, or blank text.
    #[instrument(skip(self, prompt), fields(model = %self.config.model(), prompt_len = prompt.len()))]
    pub async fn request_text(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ModelError> {
        let options = GenerateOptions::builder()
            .num_predict(max_tokens)
            .temperature(temperature)
            .top_p(*self.config.top_p())
            .repeat_penalty(*self.config.repeat_penalty())
            .build()
            .map_err(|e| ModelError::new(ModelErrorKind::Decode(e.to_string())))?;

        let body = GenerateBody::builder()
            .model(self.config.model().clone())
            .prompt(prompt)
            .stream(false)
            .options(options)
            .build()
            .map_err(|e| ModelError::new(ModelErrorKind::Decode(e.to_string())))?;

        let response = self
            .client
            .post(self.config.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "Model endpoint returned an error");
            return Err(ModelError::new(ModelErrorKind::Status {
                status: status.as_u16(),
                message,
            }));
        }

        let reply: GenerateReply = response.json().await.map_err(|e| self.classify(e))?;

        debug!(
            chars = reply.response.len(),
            done = reply.done,
            eval_count = ?reply.eval_count,
            "Received model response"
        );

        if reply.response.trim().is_empty() {
            return Err(ModelError::new(ModelErrorKind::EmptyResponse));
        }

        Ok(reply.response)
    }

    fn classify(&self, err: reqwest::Error) -> ModelError {
        let kind = if err.is_timeout() {
            ModelErrorKind::Timeout(self.config.timeout().as_millis() as u64)
        } else if err.is_decode() {
            ModelErrorKind::Decode(err.to_string())
        } else {
            ModelErrorKind::Unreachable(err.to_string())
        };
        ModelError::new(kind)
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> RawResponse {
        match self.request_text(prompt, max_tokens, temperature).await {
            Ok(text) => RawResponse::success(text),
            Err(e) => {
                let kind = ResponseErrorKind::from(e.kind());
                warn!(
                    error = %e,
                    error_kind = %kind,
                    transport = e.kind().is_transport(),
                    "Model call failed"
                );
                RawResponse::failure(kind)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
