//! Generation results and per-unit diagnostics.

use crate::StructuredContent;
use serde::{Deserialize, Serialize};

/// Diagnostics for one generation unit.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct UnitStats {
    /// Unit label, e.g. `section 3: Market Analysis` or `rows 51-100`
    label: String,
    /// Model calls issued for this unit
    attempts: u32,
    /// Whether any model output was accepted
    succeeded: bool,
    /// Whether placeholder content was substituted
    used_fallback: bool,
}

impl UnitStats {
    /// Creates unit diagnostics.
    pub fn new(label: impl Into<String>, attempts: u32, succeeded: bool, used_fallback: bool) -> Self {
        Self {
            label: label.into(),
            attempts,
            succeeded,
            used_fallback,
        }
    }

    /// Returns a builder for constructing UnitStats.
    pub fn builder() -> UnitStatsBuilder {
        UnitStatsBuilder::default()
    }
}

/// The final artifact handed to serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationResult {
    /// Merged content
    content: StructuredContent,
    /// One entry per planned unit, in plan order
    unit_stats: Vec<UnitStats>,
}

impl GenerationResult {
    /// Creates a result.
    pub fn new(content: StructuredContent, unit_stats: Vec<UnitStats>) -> Self {
        Self {
            content,
            unit_stats,
        }
    }

    /// Number of units that fell back to placeholder content.
    pub fn fallback_count(&self) -> usize {
        self.unit_stats.iter().filter(|s| s.used_fallback).count()
    }

    /// Total model calls issued.
    pub fn total_attempts(&self) -> u32 {
        self.unit_stats.iter().map(|s| s.attempts).sum()
    }

    /// Consumes the result, returning its content.
    pub fn into_content(self) -> StructuredContent {
        self.content
    }
}
