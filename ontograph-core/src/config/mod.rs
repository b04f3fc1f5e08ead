//! Configuration for Ontograph.
//! TOML-based; every section falls back to compiled defaults.

pub mod assessment_config;
pub mod confidence_config;
pub mod defaults;
pub mod observability_config;
pub mod ontograph_config;

pub use assessment_config::AssessmentConfig;
pub use confidence_config::ConfidenceConfig;
pub use observability_config::ObservabilityConfig;
pub use ontograph_config::OntographConfig;

use crate::errors::ConfigError;

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}
