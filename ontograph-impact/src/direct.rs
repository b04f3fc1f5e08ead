//! Direct impacts, computed against the pre-mutation snapshot.

use ontograph_core::constants::direct as weights;
use ontograph_core::graph::{ElementKind, GraphSnapshot};
use ontograph_core::impact::{Impact, ImpactType, Severity};
use ontograph_core::operation::Operation;

/// Direct impacts of `operation`. The first entry, when present, is the
/// primary impact on the operation's target; cascades follow in snapshot order.
///
/// Must run before the mutation: cascade deletes are only visible while the
/// deleted entity's relationships still exist.
pub fn compute(snapshot: &GraphSnapshot, operation: &Operation) -> Vec<Impact> {
    match operation {
        Operation::DeleteEntity { entity_id } => {
            let mut impacts = vec![Impact::new(
                ImpactType::EntityDeleted,
                entity_id.as_str(),
                ElementKind::Entity,
                Severity::High,
                weights::DELETE_CONFIDENCE,
            )];
            impacts.extend(snapshot.incident_relationships(entity_id).map(|r| {
                Impact::new(
                    ImpactType::EdgeCascadeDelete,
                    r.id.as_str(),
                    ElementKind::Edge,
                    Severity::High,
                    weights::DELETE_CONFIDENCE,
                )
                .caused_by(entity_id.as_str())
            }));
            impacts
        }
        Operation::UpdateEntity { entity_id, .. } => {
            let mut impacts = vec![Impact::new(
                ImpactType::EntityModified,
                entity_id.as_str(),
                ElementKind::Entity,
                Severity::Medium,
                weights::ENTITY_UPDATE_CONFIDENCE,
            )
            .with_changed_attributes(operation.changed_attribute_names())];
            impacts.extend(snapshot.incident_relationships(entity_id).map(|r| {
                Impact::new(
                    ImpactType::EdgeValidityChange,
                    r.id.as_str(),
                    ElementKind::Edge,
                    Severity::Medium,
                    weights::EDGE_VALIDITY_CONFIDENCE,
                )
                .caused_by(entity_id.as_str())
            }));
            impacts
        }
        Operation::DeleteEdge { edge_id } => vec![Impact::new(
            ImpactType::EdgeModified,
            edge_id.as_str(),
            ElementKind::Edge,
            Severity::Medium,
            weights::EDGE_DELETE_CONFIDENCE,
        )],
        Operation::UpdateEdge { edge_id, .. } => vec![Impact::new(
            ImpactType::EdgeModified,
            edge_id.as_str(),
            ElementKind::Edge,
            Severity::Medium,
            weights::EDGE_UPDATE_CONFIDENCE,
        )
        .with_changed_attributes(operation.changed_attribute_names())],
        Operation::CreateEntity { .. } | Operation::CreateEdge { .. } => Vec::new(),
    }
}
