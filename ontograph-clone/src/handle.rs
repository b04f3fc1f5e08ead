use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque reference to an open graph clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CloneHandle {
    clone_id: String,
    graph_id: String,
}

impl CloneHandle {
    pub(crate) fn new(clone_id: String, graph_id: String) -> Self {
        Self { clone_id, graph_id }
    }

    pub fn clone_id(&self) -> &str {
        &self.clone_id
    }

    /// The live graph this clone was copied from.
    pub fn graph_id(&self) -> &str {
        &self.graph_id
    }
}

impl fmt::Display for CloneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (of {})", self.clone_id, self.graph_id)
    }
}

/// Where a clone is in its preview session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloneStatus {
    pub handle: CloneHandle,
    pub opened_at: DateTime<Utc>,
    /// Whether an assessment has already mutated the working snapshot.
    pub assessed: bool,
    pub entity_count: usize,
    pub relationship_count: usize,
}
