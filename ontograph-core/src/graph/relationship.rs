use serde::{Deserialize, Serialize};

use super::AttributeMap;

/// A typed, directed connection between two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    /// Semantic type from the ontology (e.g. "WORKS_AT").
    pub relation_type: String,
    #[serde(default)]
    pub attributes: AttributeMap,
}

impl Relationship {
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        relation_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            relation_type: relation_type.into(),
            attributes: AttributeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Whether `entity_id` is the source or the target of this edge.
    pub fn touches(&self, entity_id: &str) -> bool {
        self.source_id == entity_id || self.target_id == entity_id
    }

    /// The endpoint opposite to `entity_id`, if `entity_id` is an endpoint.
    /// A self-loop returns the entity itself.
    pub fn other_endpoint(&self, entity_id: &str) -> Option<&str> {
        if self.source_id == entity_id {
            Some(&self.target_id)
        } else if self.target_id == entity_id {
            Some(&self.source_id)
        } else {
            None
        }
    }
}
