//! Error handling for Ontograph.
//! One error enum per subsystem, `thiserror` only, aggregated in [`OntographError`].

pub mod clone_error;
pub mod config_error;
pub mod error_code;
pub mod impact_error;

pub use clone_error::CloneError;
pub use config_error::ConfigError;
pub use error_code::OntographErrorCode;
pub use impact_error::ImpactError;

use error_code::SERIALIZATION_ERROR;

/// Top-level error surfaced to callers of the clone manager and the engine.
#[derive(Debug, thiserror::Error)]
pub enum OntographError {
    #[error("impact error: {0}")]
    Impact(#[from] ImpactError),

    #[error("clone error: {0}")]
    Clone(#[from] CloneError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for OntographError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

impl OntographErrorCode for OntographError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Impact(e) => e.error_code(),
            Self::Clone(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization { .. } => SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type OntographResult<T> = Result<T, OntographError>;
