//! Indirect impacts: entities one hop from the primary direct impact.

use ontograph_core::graph::{ElementKind, GraphSnapshot};
use ontograph_core::impact::{Impact, ImpactType};

use crate::context::AssessmentContext;
use crate::mutation::AppliedMutation;
use crate::ripple::RippleSeed;

/// Entities connected to the mutated element, in discovery order, possibly
/// with repeats.
///
/// A deleted entity is gone from `after`, so its neighbours come from the
/// cascaded relationships captured before removal. A deleted edge contributes
/// its former endpoints.
pub fn connected_entities(applied: &AppliedMutation, after: &GraphSnapshot) -> Vec<String> {
    match applied {
        AppliedMutation::EntityDeleted { entity, cascaded } => cascaded
            .iter()
            .filter_map(|r| r.other_endpoint(&entity.id))
            .map(str::to_string)
            .collect(),
        AppliedMutation::EntityUpdated { entity_id } => after
            .incident_relationships(entity_id)
            .filter_map(|r| r.other_endpoint(entity_id))
            .map(str::to_string)
            .collect(),
        AppliedMutation::EdgeDeleted { edge } => {
            vec![edge.source_id.clone(), edge.target_id.clone()]
        }
        AppliedMutation::EdgeUpdated { edge_id } => after
            .relationship(edge_id)
            .map(|r| vec![r.source_id.clone(), r.target_id.clone()])
            .unwrap_or_default(),
        AppliedMutation::EntityCreated { .. } | AppliedMutation::EdgeCreated { .. } => Vec::new(),
    }
}

/// Record one `RIPPLE_EFFECT` per newly seen connected entity into
/// `ctx.indirect` and return them as ripple seeds.
///
/// Severity is one step below `primary`, confidence `primary × decay`.
pub fn compute(
    ctx: &mut AssessmentContext,
    primary: &Impact,
    connected: Vec<String>,
    decay_factor: f64,
    track_paths: bool,
) -> Vec<RippleSeed> {
    let mut seeds = Vec::new();

    for entity_id in connected {
        if !ctx.visit(&entity_id) {
            continue;
        }
        let confidence = primary.confidence * decay_factor;
        let path = vec![primary.element_id.clone(), entity_id.clone()];
        let mut impact = Impact::new(
            ImpactType::RippleEffect,
            entity_id.as_str(),
            ElementKind::Entity,
            primary.severity.step_down(),
            confidence,
        )
        .caused_by(primary.element_id.as_str());
        if track_paths {
            impact = impact.with_path(path.clone());
        }

        ctx.indirect.push(impact);
        seeds.push(
            RippleSeed::new(entity_id)
                .with_confidence(confidence)
                .with_path(path),
        );
    }

    seeds
}
