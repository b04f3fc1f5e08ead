//! Assessment errors.

use super::error_code::{self, OntographErrorCode};
use crate::graph::ElementKind;

/// Errors raised while validating or applying an operation to a clone.
#[derive(Debug, thiserror::Error)]
pub enum ImpactError {
    #[error("{kind} not found: {id}")]
    ElementNotFound { kind: ElementKind, id: String },

    #[error("invalid operation: {reason}")]
    InvalidOperation { reason: String },
}

impl ImpactError {
    pub fn entity_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound {
            kind: ElementKind::Entity,
            id: id.into(),
        }
    }

    pub fn edge_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound {
            kind: ElementKind::Edge,
            id: id.into(),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            reason: reason.into(),
        }
    }
}

impl OntographErrorCode for ImpactError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ElementNotFound { .. } => error_code::ELEMENT_NOT_FOUND,
            Self::InvalidOperation { .. } => error_code::INVALID_OPERATION,
        }
    }
}
