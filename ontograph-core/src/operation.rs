//! Proposed graph mutations. One strongly-typed payload per variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ImpactError;
use crate::graph::{AttributeMap, ElementKind, Entity, Relationship};

/// A single proposed mutation of a knowledge graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    DeleteEntity {
        entity_id: String,
    },
    /// `changes` patches attributes; the reserved keys `name` and
    /// `entity_type` patch the corresponding fields. A `null` value removes
    /// the attribute.
    UpdateEntity {
        entity_id: String,
        changes: AttributeMap,
    },
    CreateEntity {
        entity: Entity,
    },
    DeleteEdge {
        edge_id: String,
    },
    /// `changes` patches attributes; the reserved key `relation_type` patches
    /// the edge type.
    UpdateEdge {
        edge_id: String,
        changes: AttributeMap,
    },
    CreateEdge {
        edge: Relationship,
    },
}

/// Discriminant of an [`Operation`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    DeleteEntity,
    UpdateEntity,
    CreateEntity,
    DeleteEdge,
    UpdateEdge,
    CreateEdge,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        Self::DeleteEntity,
        Self::UpdateEntity,
        Self::CreateEntity,
        Self::DeleteEdge,
        Self::UpdateEdge,
        Self::CreateEdge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeleteEntity => "delete_entity",
            Self::UpdateEntity => "update_entity",
            Self::CreateEntity => "create_entity",
            Self::DeleteEdge => "delete_edge",
            Self::UpdateEdge => "update_edge",
            Self::CreateEdge => "create_edge",
        }
    }

    /// Kind of element the operation targets.
    pub fn element_kind(&self) -> ElementKind {
        match self {
            Self::DeleteEntity | Self::UpdateEntity | Self::CreateEntity => ElementKind::Entity,
            Self::DeleteEdge | Self::UpdateEdge | Self::CreateEdge => ElementKind::Edge,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Operation {
    pub fn delete_entity(entity_id: impl Into<String>) -> Self {
        Self::DeleteEntity {
            entity_id: entity_id.into(),
        }
    }

    pub fn update_entity(entity_id: impl Into<String>, changes: AttributeMap) -> Self {
        Self::UpdateEntity {
            entity_id: entity_id.into(),
            changes,
        }
    }

    pub fn delete_edge(edge_id: impl Into<String>) -> Self {
        Self::DeleteEdge {
            edge_id: edge_id.into(),
        }
    }

    pub fn update_edge(edge_id: impl Into<String>, changes: AttributeMap) -> Self {
        Self::UpdateEdge {
            edge_id: edge_id.into(),
            changes,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::DeleteEntity { .. } => OperationKind::DeleteEntity,
            Self::UpdateEntity { .. } => OperationKind::UpdateEntity,
            Self::CreateEntity { .. } => OperationKind::CreateEntity,
            Self::DeleteEdge { .. } => OperationKind::DeleteEdge,
            Self::UpdateEdge { .. } => OperationKind::UpdateEdge,
            Self::CreateEdge { .. } => OperationKind::CreateEdge,
        }
    }

    /// Id of the element the operation targets (or creates).
    pub fn target_id(&self) -> &str {
        match self {
            Self::DeleteEntity { entity_id } | Self::UpdateEntity { entity_id, .. } => entity_id,
            Self::CreateEntity { entity } => &entity.id,
            Self::DeleteEdge { edge_id } | Self::UpdateEdge { edge_id, .. } => edge_id,
            Self::CreateEdge { edge } => &edge.id,
        }
    }

    /// Names of the attributes an update touches, in key order. Empty for
    /// non-update operations.
    pub fn changed_attribute_names(&self) -> Vec<String> {
        match self {
            Self::UpdateEntity { changes, .. } | Self::UpdateEdge { changes, .. } => {
                changes.keys().cloned().collect()
            }
            _ => Vec::new(),
        }
    }

    /// Shape checks that need no graph: ids present, payload non-empty.
    pub fn validate_shape(&self) -> Result<(), ImpactError> {
        if self.target_id().trim().is_empty() {
            return Err(ImpactError::invalid(format!(
                "{} requires a non-empty id",
                self.kind()
            )));
        }
        match self {
            Self::UpdateEntity { changes, .. } | Self::UpdateEdge { changes, .. }
                if changes.is_empty() =>
            {
                Err(ImpactError::invalid(format!(
                    "{} requires at least one changed attribute",
                    self.kind()
                )))
            }
            Self::CreateEdge { edge }
                if edge.source_id.trim().is_empty() || edge.target_id.trim().is_empty() =>
            {
                Err(ImpactError::invalid(format!(
                    "create_edge {} requires both endpoints",
                    edge.id
                )))
            }
            _ => Ok(()),
        }
    }
}
