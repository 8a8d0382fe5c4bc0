//! Pipeline tuning parameters.

use crate::ParserConfig;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Tunables for planning, retry, and parsing.
///
/// # Examples
///
/// ```
/// use synthgen_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .rows_per_batch(25usize)
///     .max_attempts(3u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(*config.rows_per_batch(), 25);
/// assert_eq!(*config.section_max_tokens(), 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Model calls allowed per unit before falling back (minimum 1)
    max_attempts: u32,
    /// Upper bound on rows requested in one call
    rows_per_batch: usize,
    /// Token budget for one document section
    section_max_tokens: u32,
    /// Token budget for one row batch
    batch_max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Row batches generated concurrently (output order is unaffected)
    batch_concurrency: usize,
    /// Shortest block kept as a paragraph
    min_paragraph_chars: usize,
    /// Trailing fields a row may be missing and still be accepted
    missing_field_tolerance: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            rows_per_batch: 50,
            section_max_tokens: 2000,
            batch_max_tokens: 4000,
            temperature: 0.7,
            batch_concurrency: 1,
            min_paragraph_chars: 40,
            missing_field_tolerance: 1,
        }
    }
}

impl PipelineConfig {
    /// Returns a builder for constructing a PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Attempt cap, never below one.
    pub fn attempt_limit(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Batch row cap, never below one.
    pub fn batch_row_limit(&self) -> usize {
        self.rows_per_batch.max(1)
    }

    /// Parser thresholds derived from this configuration.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new(self.min_paragraph_chars, self.missing_field_tolerance)
    }
}
