//! Top-level configuration aggregating all sub-configs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AssessmentConfig, ConfidenceConfig, ObservabilityConfig};
use super::invalid;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration. Missing sections and keys use compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OntographConfig {
    pub assessment: AssessmentConfig,
    pub confidence: ConfidenceConfig,
    pub observability: ObservabilityConfig,
}

impl OntographConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assessment.validate()?;
        self.confidence.validate()?;

        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                format!("unknown level '{}'", self.observability.log_level),
            ));
        }
        Ok(())
    }
}
