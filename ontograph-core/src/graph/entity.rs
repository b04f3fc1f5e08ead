use serde::{Deserialize, Serialize};

use super::AttributeMap;

/// A node in the knowledge graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    /// Semantic type from the ontology (e.g. "Person", "Company").
    pub entity_type: String,
    pub name: String,
    #[serde(default)]
    pub attributes: AttributeMap,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        entity_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            name: name.into(),
            attributes: AttributeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}
