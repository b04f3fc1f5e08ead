//! Validate-then-apply mutation of a working snapshot.
//!
//! [`apply`] runs every check before touching the snapshot, so a failed
//! operation leaves it exactly as it was.

use serde_json::Value;

use ontograph_core::constants::reserved_keys;
use ontograph_core::errors::ImpactError;
use ontograph_core::graph::{AttributeMap, Entity, GraphSnapshot, Relationship};
use ontograph_core::operation::Operation;

/// What a successful mutation changed. Carries the pre-mutation topology that
/// indirect-impact discovery needs once the elements are gone.
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedMutation {
    EntityDeleted {
        entity: Entity,
        /// Relationships removed along with the entity.
        cascaded: Vec<Relationship>,
    },
    EntityUpdated {
        entity_id: String,
    },
    EntityCreated {
        entity_id: String,
    },
    EdgeDeleted {
        edge: Relationship,
    },
    EdgeUpdated {
        edge_id: String,
    },
    EdgeCreated {
        edge_id: String,
    },
}

/// Check `operation` against `snapshot` without mutating it.
pub fn validate(snapshot: &GraphSnapshot, operation: &Operation) -> Result<(), ImpactError> {
    operation.validate_shape()?;

    match operation {
        Operation::DeleteEntity { entity_id } => require_entity(snapshot, entity_id),
        Operation::UpdateEntity { entity_id, changes } => {
            require_entity(snapshot, entity_id)?;
            for key in [reserved_keys::NAME, reserved_keys::ENTITY_TYPE] {
                require_string(changes, key, key == reserved_keys::ENTITY_TYPE)?;
            }
            Ok(())
        }
        Operation::CreateEntity { entity } => {
            if snapshot.contains_entity(&entity.id) {
                return Err(ImpactError::invalid(format!(
                    "entity {} already exists",
                    entity.id
                )));
            }
            Ok(())
        }
        Operation::DeleteEdge { edge_id } => require_edge(snapshot, edge_id),
        Operation::UpdateEdge { edge_id, changes } => {
            require_edge(snapshot, edge_id)?;
            if let Some(key) = ["source_id", "target_id"]
                .into_iter()
                .find(|k| changes.contains_key(*k))
            {
                return Err(ImpactError::invalid(format!(
                    "{key} of edge {edge_id} cannot be patched; delete and recreate the edge"
                )));
            }
            require_string(changes, reserved_keys::RELATION_TYPE, true)
        }
        Operation::CreateEdge { edge } => {
            if snapshot.contains_relationship(&edge.id) {
                return Err(ImpactError::invalid(format!(
                    "edge {} already exists",
                    edge.id
                )));
            }
            require_entity(snapshot, &edge.source_id)?;
            require_entity(snapshot, &edge.target_id)
        }
    }
}

/// Validate, then apply `operation` to `snapshot`.
pub fn apply(
    snapshot: &mut GraphSnapshot,
    operation: &Operation,
) -> Result<AppliedMutation, ImpactError> {
    validate(snapshot, operation)?;

    let applied = match operation {
        Operation::DeleteEntity { entity_id } => {
            let (entity, cascaded) = snapshot
                .remove_entity(entity_id)
                .ok_or_else(|| ImpactError::entity_not_found(entity_id.as_str()))?;
            AppliedMutation::EntityDeleted { entity, cascaded }
        }
        Operation::UpdateEntity { entity_id, changes } => {
            let entity = snapshot
                .entity_mut(entity_id)
                .ok_or_else(|| ImpactError::entity_not_found(entity_id.as_str()))?;
            for (key, value) in changes {
                match (key.as_str(), value) {
                    (reserved_keys::NAME, Value::String(name)) => entity.name = name.clone(),
                    (reserved_keys::ENTITY_TYPE, Value::String(t)) => {
                        entity.entity_type = t.clone()
                    }
                    (_, value) => patch_attribute(&mut entity.attributes, key, value),
                }
            }
            AppliedMutation::EntityUpdated {
                entity_id: entity_id.clone(),
            }
        }
        Operation::CreateEntity { entity } => {
            snapshot.entities.push(entity.clone());
            AppliedMutation::EntityCreated {
                entity_id: entity.id.clone(),
            }
        }
        Operation::DeleteEdge { edge_id } => {
            let edge = snapshot
                .remove_relationship(edge_id)
                .ok_or_else(|| ImpactError::edge_not_found(edge_id.as_str()))?;
            AppliedMutation::EdgeDeleted { edge }
        }
        Operation::UpdateEdge { edge_id, changes } => {
            let edge = snapshot
                .relationship_mut(edge_id)
                .ok_or_else(|| ImpactError::edge_not_found(edge_id.as_str()))?;
            for (key, value) in changes {
                match (key.as_str(), value) {
                    (reserved_keys::RELATION_TYPE, Value::String(t)) => {
                        edge.relation_type = t.clone()
                    }
                    (_, value) => patch_attribute(&mut edge.attributes, key, value),
                }
            }
            AppliedMutation::EdgeUpdated {
                edge_id: edge_id.clone(),
            }
        }
        Operation::CreateEdge { edge } => {
            snapshot.relationships.push(edge.clone());
            AppliedMutation::EdgeCreated {
                edge_id: edge.id.clone(),
            }
        }
    };

    Ok(applied)
}

fn require_entity(snapshot: &GraphSnapshot, id: &str) -> Result<(), ImpactError> {
    if snapshot.contains_entity(id) {
        Ok(())
    } else {
        Err(ImpactError::entity_not_found(id))
    }
}

fn require_edge(snapshot: &GraphSnapshot, id: &str) -> Result<(), ImpactError> {
    if snapshot.contains_relationship(id) {
        Ok(())
    } else {
        Err(ImpactError::edge_not_found(id))
    }
}

/// A reserved key, if present, must carry a string (non-empty when `non_empty`).
fn require_string(changes: &AttributeMap, key: &str, non_empty: bool) -> Result<(), ImpactError> {
    match changes.get(key) {
        None => Ok(()),
        Some(Value::String(s)) if !non_empty || !s.trim().is_empty() => Ok(()),
        Some(_) => Err(ImpactError::invalid(format!(
            "{key} must be a non-empty string"
        ))),
    }
}

/// `null` removes the attribute; anything else overwrites it.
fn patch_attribute(attributes: &mut AttributeMap, key: &str, value: &Value) {
    if value.is_null() {
        attributes.remove(key);
    } else {
        attributes.insert(key.to_string(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> GraphSnapshot {
        GraphSnapshot::new()
            .with_entity(Entity::new("a", "Person", "Ada").with_attribute("age", json!(36)))
            .with_entity(Entity::new("b", "Company", "Acme"))
            .with_relationship(Relationship::new("ab", "a", "b", "WORKS_AT"))
    }

    fn changes(pairs: &[(&str, Value)]) -> AttributeMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn delete_entity_returns_cascaded_edges() {
        let mut snap = snapshot();
        let applied = apply(&mut snap, &Operation::delete_entity("a")).unwrap();
        match applied {
            AppliedMutation::EntityDeleted { entity, cascaded } => {
                assert_eq!(entity.id, "a");
                assert_eq!(cascaded.len(), 1);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(snap.relationship_count(), 0);
    }

    #[test]
    fn update_patches_fields_and_removes_null_attributes() {
        let mut snap = snapshot();
        let op = Operation::update_entity(
            "a",
            changes(&[("name", json!("Ada L.")), ("age", Value::Null), ("role", json!("CTO"))]),
        );
        apply(&mut snap, &op).unwrap();
        let a = snap.entity("a").unwrap();
        assert_eq!(a.name, "Ada L.");
        assert!(!a.attributes.contains_key("age"));
        assert_eq!(a.attributes["role"], json!("CTO"));
    }

    #[test]
    fn failed_validation_leaves_snapshot_untouched() {
        let mut snap = snapshot();
        let before = snap.clone();
        let op = Operation::update_entity("a", changes(&[("entity_type", json!(""))]));
        assert!(apply(&mut snap, &op).is_err());
        assert_eq!(snap, before);

        let dangling = Operation::CreateEdge {
            edge: Relationship::new("ax", "a", "x", "KNOWS"),
        };
        assert!(matches!(
            apply(&mut snap, &dangling),
            Err(ImpactError::ElementNotFound { .. })
        ));
        assert_eq!(snap, before);
    }

    #[test]
    fn duplicate_create_is_invalid() {
        let mut snap = snapshot();
        let op = Operation::CreateEntity {
            entity: Entity::new("a", "Person", "Again"),
        };
        assert!(matches!(
            apply(&mut snap, &op),
            Err(ImpactError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn edge_endpoints_cannot_be_patched() {
        let op = Operation::update_edge("ab", changes(&[("target_id", json!("a"))]));
        assert!(validate(&snapshot(), &op).is_err());
    }
}
