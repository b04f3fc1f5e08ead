//! Live-vs-clone comparison: what a commit would add, remove, or change.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use ontograph_core::graph::{ElementKind, Entity, GraphSnapshot, Relationship};

/// A single element present in both snapshots with differing content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementChange {
    pub id: String,
    pub kind: ElementKind,
    /// Changed field names; attribute changes are reported as `attributes.<key>`.
    pub changed_fields: Vec<String>,
}

/// Differences between a `before` and an `after` snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDiff {
    pub entities_added: Vec<Entity>,
    pub entities_removed: Vec<Entity>,
    pub entities_modified: Vec<ElementChange>,
    pub edges_added: Vec<Relationship>,
    pub edges_removed: Vec<Relationship>,
    pub edges_modified: Vec<ElementChange>,
    /// Entity types present after but not before.
    pub new_entity_types: Vec<String>,
    /// Relationship types present after but not before.
    pub new_relation_types: Vec<String>,
}

impl SnapshotDiff {
    /// Compare two snapshots by element id. Output follows snapshot order.
    pub fn compare(before: &GraphSnapshot, after: &GraphSnapshot) -> Self {
        let mut diff = Self::default();

        let before_entities: HashMap<&str, &Entity> =
            before.entities.iter().map(|e| (e.id.as_str(), e)).collect();
        let after_entities: HashMap<&str, &Entity> =
            after.entities.iter().map(|e| (e.id.as_str(), e)).collect();

        for entity in &after.entities {
            match before_entities.get(entity.id.as_str()) {
                None => diff.entities_added.push(entity.clone()),
                Some(old) => {
                    let changed = entity_changes(old, entity);
                    if !changed.is_empty() {
                        diff.entities_modified.push(ElementChange {
                            id: entity.id.clone(),
                            kind: ElementKind::Entity,
                            changed_fields: changed,
                        });
                    }
                }
            }
        }
        diff.entities_removed = before
            .entities
            .iter()
            .filter(|e| !after_entities.contains_key(e.id.as_str()))
            .cloned()
            .collect();

        let before_edges: HashMap<&str, &Relationship> =
            before.relationships.iter().map(|r| (r.id.as_str(), r)).collect();
        let after_edges: HashMap<&str, &Relationship> =
            after.relationships.iter().map(|r| (r.id.as_str(), r)).collect();

        for edge in &after.relationships {
            match before_edges.get(edge.id.as_str()) {
                None => diff.edges_added.push(edge.clone()),
                Some(old) => {
                    let changed = edge_changes(old, edge);
                    if !changed.is_empty() {
                        diff.edges_modified.push(ElementChange {
                            id: edge.id.clone(),
                            kind: ElementKind::Edge,
                            changed_fields: changed,
                        });
                    }
                }
            }
        }
        diff.edges_removed = before
            .relationships
            .iter()
            .filter(|r| !after_edges.contains_key(r.id.as_str()))
            .cloned()
            .collect();

        let before_types = before.entity_type_counts();
        diff.new_entity_types = after
            .entity_type_counts()
            .into_keys()
            .filter(|t| !before_types.contains_key(t))
            .collect();
        let before_relations = before.relationship_type_counts();
        diff.new_relation_types = after
            .relationship_type_counts()
            .into_keys()
            .filter(|t| !before_relations.contains_key(t))
            .collect();

        diff
    }

    pub fn is_empty(&self) -> bool {
        self.change_count() == 0
    }

    /// Number of added, removed, and modified elements.
    pub fn change_count(&self) -> usize {
        self.entities_added.len()
            + self.entities_removed.len()
            + self.entities_modified.len()
            + self.edges_added.len()
            + self.edges_removed.len()
            + self.edges_modified.len()
    }
}

fn entity_changes(old: &Entity, new: &Entity) -> Vec<String> {
    let mut changed = Vec::new();
    if old.entity_type != new.entity_type {
        changed.push("entity_type".to_string());
    }
    if old.name != new.name {
        changed.push("name".to_string());
    }
    changed.extend(attribute_changes(&old.attributes, &new.attributes));
    changed
}

fn edge_changes(old: &Relationship, new: &Relationship) -> Vec<String> {
    let mut changed = Vec::new();
    if old.source_id != new.source_id {
        changed.push("source_id".to_string());
    }
    if old.target_id != new.target_id {
        changed.push("target_id".to_string());
    }
    if old.relation_type != new.relation_type {
        changed.push("relation_type".to_string());
    }
    changed.extend(attribute_changes(&old.attributes, &new.attributes));
    changed
}

fn attribute_changes(
    old: &ontograph_core::AttributeMap,
    new: &ontograph_core::AttributeMap,
) -> Vec<String> {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();
    keys.into_iter()
        .filter(|k| old.get(*k) != new.get(*k))
        .map(|k| format!("attributes.{k}"))
        .collect()
}
