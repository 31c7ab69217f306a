//! Agent configuration.
//!
//! Values come from [`AgentConfig::default`] and the builder methods. With the
//! `config-support` feature they can also come from a TOML document or an
//! optional TOML file layered under `REACT_AGENT_*` environment variables.

#[cfg(feature = "config-support")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Iteration cap used when none is configured
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "REACT_AGENT";

/// Configuration for a [`ReActAgent`](crate::agent::ReActAgent)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Maximum number of generation calls per run
    pub max_iterations: usize,
    /// Include raw generated text in LLM call events
    pub log_llm_responses: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            log_llm_responses: false,
        }
    }
}

impl AgentConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_log_llm_responses(mut self, enabled: bool) -> Self {
        self.log_llm_responses = enabled;
        self
    }

    /// Reject values the agent loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_iterations".to_string(),
                value: self.max_iterations.to_string(),
                expected: "a positive integer".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "config-support")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParsingFailed {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    #[cfg(feature = "config-support")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&source).map_err(|e| ConfigError::ParsingFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load defaults, then an optional TOML file, then `REACT_AGENT_*`
    /// environment variables (e.g. `REACT_AGENT_MAX_ITERATIONS=5`).
    #[cfg(feature = "config-support")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        use config::{Config, Environment, File, FileFormat};

        let origin = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<environment>".to_string());
        let parsing_failed = |e: config::ConfigError| ConfigError::ParsingFailed {
            path: origin.clone(),
            reason: e.to_string(),
        };

        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("max_iterations", defaults.max_iterations as i64)
            .map_err(parsing_failed)?
            .set_default("log_llm_responses", defaults.log_llm_responses)
            .map_err(parsing_failed)?;

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound { path: origin.clone() }.into());
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(parsing_failed)?
            .try_deserialize()
            .map_err(parsing_failed)?;
        config.validate()?;
        Ok(config)
    }
}
