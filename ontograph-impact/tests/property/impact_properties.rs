//! Property tests for ontograph-impact: confidence bounds, attribution
//! uniqueness, coverage, cascade completeness, ripple monotonicity, and live
//! graph isolation.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;

use ontograph_clone::{CloneManager, InMemorySnapshotStore};
use ontograph_core::graph::{AttributeMap, Entity, GraphSnapshot, Relationship};
use ontograph_core::impact::{ImpactReport, ImpactType, Severity};
use ontograph_core::operation::Operation;
use ontograph_core::traits::ISnapshotStore;
use ontograph_impact::AssessmentEngine;

/// Build a graph with `n` entities and the given (possibly looping, possibly
/// parallel) edges.
fn build_graph(n: usize, edges: &[(usize, usize)]) -> GraphSnapshot {
    let entities = (0..n)
        .map(|i| Entity::new(format!("n{i}"), "Node", format!("Node {i}")))
        .collect();
    let relationships = edges
        .iter()
        .enumerate()
        .map(|(k, &(s, t))| {
            Relationship::new(format!("r{k}"), format!("n{s}"), format!("n{t}"), "LINK")
        })
        .collect();
    GraphSnapshot::from_parts(entities, relationships)
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2_usize..25).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n * 3)))
}

/// Pick an operation of kind `kind % 6` targeting element `pick`.
fn make_operation(snapshot: &GraphSnapshot, kind: u8, pick: usize) -> Operation {
    let entity = &snapshot.entities[pick % snapshot.entities.len()].id;
    let edge = snapshot
        .relationships
        .get(pick % snapshot.relationships.len().max(1))
        .map(|r| r.id.clone());
    let mut changes = AttributeMap::new();
    changes.insert("touched".into(), json!(true));

    match (kind % 6, edge) {
        (0, _) => Operation::delete_entity(entity.as_str()),
        (1, _) => Operation::update_entity(entity.as_str(), changes),
        (2, Some(edge)) => Operation::delete_edge(edge),
        (3, Some(edge)) => Operation::update_edge(edge, changes),
        (4, _) => Operation::CreateEntity {
            entity: Entity::new("fresh", "Node", "Fresh"),
        },
        _ => Operation::CreateEdge {
            edge: Relationship::new("fresh-edge", entity.as_str(), "n0", "LINK"),
        },
    }
}

fn assess(
    snapshot: GraphSnapshot,
    operation: Operation,
) -> (Arc<InMemorySnapshotStore>, ImpactReport) {
    let store = Arc::new(InMemorySnapshotStore::with_graph("g", snapshot).unwrap());
    let manager = CloneManager::new(store.clone());
    let handle = manager.open("g").unwrap();
    let report = AssessmentEngine::new()
        .assess_impact(&manager, &handle, operation)
        .unwrap();
    manager.reject(&handle).unwrap();
    (store, report)
}

// =============================================================================
// Confidence bounds
// =============================================================================
proptest! {
    #[test]
    fn confidence_is_bounded(
        (n, edges) in graph_strategy(),
        kind in 0_u8..6,
        pick in 0_usize..100,
    ) {
        let snapshot = build_graph(n, &edges);
        let op = make_operation(&snapshot, kind, pick);
        let (_, report) = assess(snapshot, op);
        let score = report.confidence();

        prop_assert!((0.0..=1.0).contains(&score.overall));
        prop_assert!(score.range.min >= 0.0 && score.range.max <= 1.0);
        prop_assert!(score.range.min <= score.overall && score.overall <= score.range.max);
        prop_assert!(score.range.width() <= 0.25 + 1e-9, "width {}", score.range.width());
        let factors = &score.factors;
        for factor in [factors.operation_complexity, factors.spread, factors.graph_density] {
            prop_assert!((0.0..=1.0).contains(&factor));
        }
    }
}

// =============================================================================
// No duplicate attribution; coverage bound
// =============================================================================
proptest! {
    #[test]
    fn indirect_and_ripple_never_repeat_an_element(
        (n, edges) in graph_strategy(),
        kind in 0_u8..4,
        pick in 0_usize..100,
    ) {
        let snapshot = build_graph(n, &edges);
        let op = make_operation(&snapshot, kind, pick);
        let target = op.target_id().to_string();
        let (_, report) = assess(snapshot, op);

        let mut seen = HashSet::new();
        for impact in report.indirect_impacts().iter().chain(report.ripple_impacts()) {
            prop_assert!(
                seen.insert(impact.element_id.clone()),
                "{} reported twice",
                impact.element_id
            );
            prop_assert_ne!(&impact.element_id, &target);
        }

        let pct = report.statistics().percentage_of_graph;
        prop_assert!((0.0..=100.0).contains(&pct));
        prop_assert_eq!(
            report.statistics().total_affected,
            report.direct_impacts().len()
                + report.indirect_impacts().len()
                + report.ripple_impacts().len()
        );
    }
}

// =============================================================================
// Cascade completeness
// =============================================================================
proptest! {
    #[test]
    fn delete_entity_cascades_exactly_the_incident_edges(
        (n, edges) in graph_strategy(),
        pick in 0_usize..100,
    ) {
        let snapshot = build_graph(n, &edges);
        let target = snapshot.entities[pick % n].id.clone();
        let incident: HashSet<String> = snapshot
            .incident_relationships(&target)
            .map(|r| r.id.clone())
            .collect();

        let (_, report) = assess(snapshot, Operation::delete_entity(target.as_str()));
        let cascaded: HashSet<String> = report
            .direct_impacts()
            .iter()
            .filter(|i| i.impact_type == ImpactType::EdgeCascadeDelete)
            .map(|i| i.element_id.clone())
            .collect();

        prop_assert_eq!(
            cascaded.len(),
            report.statistics().count_of(ImpactType::EdgeCascadeDelete)
        );
        prop_assert_eq!(cascaded, incident);
    }
}

// =============================================================================
// Severity/depth monotonicity and confidence decay along chains
// =============================================================================
proptest! {
    #[test]
    fn ripple_severity_and_confidence_follow_depth(
        (n, edges) in graph_strategy(),
        kind in 0_u8..4,
        pick in 0_usize..100,
    ) {
        let snapshot = build_graph(n, &edges);
        let op = make_operation(&snapshot, kind, pick);
        let (_, report) = assess(snapshot, op);

        let confidence_of: HashMap<&str, f64> = report
            .indirect_impacts()
            .iter()
            .chain(report.ripple_impacts())
            .map(|i| (i.element_id.as_str(), i.confidence))
            .collect();

        for impact in report.ripple_impacts() {
            let depth = impact.depth.expect("ripple impacts carry a depth");
            let expected = match depth {
                1 => Severity::High,
                2 => Severity::Medium,
                _ => Severity::Low,
            };
            prop_assert_eq!(impact.severity, expected);

            let cause = impact.caused_by.as_deref().expect("ripple impacts carry a cause");
            let parent = confidence_of.get(cause).copied();
            prop_assert!(parent.is_some(), "cause {} not reported", cause);
            prop_assert!(impact.confidence < parent.unwrap_or(0.0));
        }
    }
}

// =============================================================================
// Live immutability after reject
// =============================================================================
proptest! {
    #[test]
    fn reject_leaves_live_snapshot_byte_identical(
        (n, edges) in graph_strategy(),
        kind in 0_u8..6,
        pick in 0_usize..100,
    ) {
        let snapshot = build_graph(n, &edges);
        let hash_before = snapshot.content_hash().unwrap();
        let op = make_operation(&snapshot, kind, pick);

        let (store, _) = assess(snapshot, op);
        let live = store.load("g").unwrap().unwrap();
        prop_assert_eq!(live.content_hash().unwrap(), hash_before);
    }
}
