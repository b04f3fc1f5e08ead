//! Knowledge-graph model: entities, relationships, and point-in-time snapshots.

pub mod entity;
pub mod relationship;
pub mod snapshot;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use entity::Entity;
pub use relationship::Relationship;
pub use snapshot::GraphSnapshot;

/// Free-form attribute bag carried by entities and relationships.
/// Ordered so serialization (and therefore content hashing) is stable.
pub type AttributeMap = BTreeMap<String, serde_json::Value>;

/// Which collection of a snapshot an element lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Entity,
    Edge,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
