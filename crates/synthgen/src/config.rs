//! Layered application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `SYNTHGEN__<SECTION>__<KEY>` environment variables. Command-line
//! flags are applied on top by the binary.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use synthgen_error::{ConfigError, SynthgenResult};
use synthgen_models::ModelConfig;
use synthgen_pipeline::PipelineConfig;
use tracing::{debug, instrument};

/// File read when no path is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "synthgen.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SYNTHGEN";

/// Complete configuration for one run.
///
/// # Examples
///
/// ```toml
/// [model]
/// base_url = "http://localhost:11434"
/// model = "mistral"
/// timeout_secs = 120
///
/// [pipeline]
/// max_attempts = 2
/// rows_per_batch = 50
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct AppConfig {
    /// Model endpoint settings
    model: ModelConfig,
    /// Generation pipeline tunables
    pipeline: PipelineConfig,
}

impl AppConfig {
    /// Creates a configuration from its parts.
    pub fn new(model: ModelConfig, pipeline: PipelineConfig) -> Self {
        Self { model, pipeline }
    }

    /// Loads configuration from defaults, a file, and the environment.
    ///
    /// An explicit `path` must exist; without one, [`DEFAULT_CONFIG_FILE`] is
    /// read only if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read or a value has the
    /// wrong type.
    #[instrument(fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> SynthgenResult<Self> {
        let required = path.is_some();
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let settings = config::Config::builder()
            .add_source(config::File::from(file.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read configuration: {}", e)))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        debug!(
            base_url = %loaded.model.base_url(),
            model = %loaded.model.model(),
            max_attempts = loaded.pipeline.max_attempts(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Applies command-line overrides for the model endpoint.
    pub fn with_model_overrides(mut self, base_url: Option<String>, model: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.model = self.model.with_base_url(base_url);
        }
        if let Some(model) = model {
            self.model = self.model.with_model(model);
        }
        self
    }
}
