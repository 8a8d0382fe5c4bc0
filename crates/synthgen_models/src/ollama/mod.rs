//! Ollama local model client.
//!
//! Speaks the non-streaming `/api/generate` format.

mod client;
mod dto;

pub use client::OllamaClient;
pub use dto::{GenerateBody, GenerateOptions, GenerateReply};
