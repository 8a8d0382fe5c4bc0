//! Trait definitions for synthgen.
//!
//! The generation pipeline talks to a model only through [`ModelClient`], so
//! tests can substitute scripted clients for the HTTP implementation.

use async_trait::async_trait;
use synthgen_core::RawResponse;

/// The sole boundary to a text-generation model.
///
/// Implementations apply a bounded wait and never retry; timeouts, transport
/// failures, and blank output are reported through [`RawResponse`] rather than
/// as errors, so callers never special-case blank text.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use synthgen_core::RawResponse;
/// use synthgen_interface::ModelClient;
///
/// struct Canned;
///
/// #[async_trait]
/// impl ModelClient for Canned {
///     async fn generate(&self, _prompt: &str, _max_tokens: u32, _temperature: f32) -> RawResponse {
///         RawResponse::success("Solar,450,0.21,Nevada")
///     }
///
///     fn provider_name(&self) -> &'static str {
///         "canned"
///     }
///
///     fn model_name(&self) -> &str {
///         "canned-v1"
///     }
/// }
/// ```
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends one prompt and returns the raw outcome.
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> RawResponse;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier for logging.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: ModelClient + ?Sized> ModelClient for std::sync::Arc<T> {
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> RawResponse {
        (**self).generate(prompt, max_tokens, temperature).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
