//! Point-in-time graph state: ordered entities and relationships.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Entity, Relationship};
use crate::errors::{ImpactError, OntographResult};

/// An ordered collection of entities and relationships.
///
/// Lookups are linear scans; a single graph is expected to stay in the low
/// thousands of elements. Traversal-heavy code builds an index instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl GraphSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(entities: Vec<Entity>, relationships: Vec<Relationship>) -> Self {
        Self {
            entities,
            relationships,
        }
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    // --- Lookup ---

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.id == id)
    }

    pub fn relationship_mut(&mut self, id: &str) -> Option<&mut Relationship> {
        self.relationships.iter_mut().find(|r| r.id == id)
    }

    pub fn contains_entity(&self, id: &str) -> bool {
        self.entity(id).is_some()
    }

    pub fn contains_relationship(&self, id: &str) -> bool {
        self.relationship(id).is_some()
    }

    /// Relationships whose source or target is `entity_id`, in snapshot order.
    pub fn incident_relationships<'a>(
        &'a self,
        entity_id: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships.iter().filter(move |r| r.touches(entity_id))
    }

    // --- Counts ---

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Entities plus relationships.
    pub fn element_count(&self) -> usize {
        self.entities.len() + self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }

    /// Histogram of entity semantic types.
    pub fn entity_type_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entity in &self.entities {
            *counts.entry(entity.entity_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Histogram of relationship semantic types.
    pub fn relationship_type_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for relationship in &self.relationships {
            *counts.entry(relationship.relation_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    // --- Mutation ---

    /// Remove an entity and every relationship incident to it.
    /// Returns the removed entity and the cascade-removed relationships.
    pub fn remove_entity(&mut self, id: &str) -> Option<(Entity, Vec<Relationship>)> {
        let position = self.entities.iter().position(|e| e.id == id)?;
        let entity = self.entities.remove(position);

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.relationships)
            .into_iter()
            .partition(|r| r.touches(id));
        self.relationships = kept;

        Some((entity, removed))
    }

    pub fn remove_relationship(&mut self, id: &str) -> Option<Relationship> {
        let position = self.relationships.iter().position(|r| r.id == id)?;
        Some(self.relationships.remove(position))
    }

    // --- Integrity ---

    /// Check id uniqueness and that every relationship endpoint exists.
    pub fn validate(&self) -> Result<(), ImpactError> {
        let mut entity_ids = HashSet::with_capacity(self.entities.len());
        for entity in &self.entities {
            if entity.id.is_empty() {
                return Err(ImpactError::invalid("entity with empty id"));
            }
            if !entity_ids.insert(entity.id.as_str()) {
                return Err(ImpactError::invalid(format!(
                    "duplicate entity id: {}",
                    entity.id
                )));
            }
        }

        let mut edge_ids = HashSet::with_capacity(self.relationships.len());
        for relationship in &self.relationships {
            if relationship.id.is_empty() {
                return Err(ImpactError::invalid("relationship with empty id"));
            }
            if !edge_ids.insert(relationship.id.as_str()) {
                return Err(ImpactError::invalid(format!(
                    "duplicate relationship id: {}",
                    relationship.id
                )));
            }
            for endpoint in [&relationship.source_id, &relationship.target_id] {
                if !entity_ids.contains(endpoint.as_str()) {
                    return Err(ImpactError::invalid(format!(
                        "relationship {} references missing entity {}",
                        relationship.id, endpoint
                    )));
                }
            }
        }
        Ok(())
    }

    /// blake3 hex digest of the canonical JSON form.
    /// Two snapshots with equal hashes are byte-for-byte identical.
    pub fn content_hash(&self) -> OntographResult<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}
