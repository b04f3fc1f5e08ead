//! Graph clone lifecycle errors.

use super::error_code::{self, OntographErrorCode};

/// Errors raised at the clone-management boundary.
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    #[error("clone not found: {clone_id}")]
    CloneNotFound { clone_id: String },

    #[error("graph {graph_id} already has an open clone: {clone_id}")]
    CloneConflict { graph_id: String, clone_id: String },

    #[error("graph not found: {graph_id}")]
    GraphNotFound { graph_id: String },

    #[error("lock poisoned: {details}")]
    LockPoisoned { details: String },
}

impl OntographErrorCode for CloneError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CloneNotFound { .. } => error_code::CLONE_NOT_FOUND,
            Self::CloneConflict { .. } => error_code::CLONE_CONFLICT,
            Self::GraphNotFound { .. } => error_code::GRAPH_NOT_FOUND,
            Self::LockPoisoned { .. } => error_code::CONCURRENCY_ERROR,
        }
    }
}
