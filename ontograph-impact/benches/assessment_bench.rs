use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use ontograph_clone::{CloneManager, InMemorySnapshotStore};
use ontograph_core::operation::Operation;
use ontograph_impact::{AssessmentEngine, IndexedGraph, RippleCalculator};
use test_fixtures::generated_graph;

/// 1000 entities, ~3 outgoing relationships each.
fn bench_assess_delete_1k(c: &mut Criterion) {
    let snapshot = generated_graph(1_000, 3, 7);
    let engine = AssessmentEngine::new();

    c.bench_function("assess_delete_entity_1k_entities", |b| {
        b.iter_batched(
            || {
                let store =
                    Arc::new(InMemorySnapshotStore::with_graph("g", snapshot.clone()).unwrap());
                let manager = CloneManager::new(store);
                let handle = manager.open("g").unwrap();
                (manager, handle)
            },
            |(manager, handle)| {
                engine
                    .assess_impact(&manager, &handle, Operation::delete_entity("e0"))
                    .unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_ripple_depth_3(c: &mut Criterion) {
    let graph = IndexedGraph::from_snapshot(&generated_graph(1_000, 3, 7));
    let calculator = RippleCalculator::default();

    c.bench_function("ripple_depth_3_1k_entities", |b| {
        b.iter(|| calculator.ripples_from(&graph, &["e0", "e1"], 3));
    });
}

fn bench_index_build(c: &mut Criterion) {
    let snapshot = generated_graph(1_000, 3, 7);

    c.bench_function("indexed_graph_build_1k_entities", |b| {
        b.iter(|| IndexedGraph::from_snapshot(&snapshot));
    });
}

criterion_group!(benches, bench_assess_delete_1k, bench_ripple_depth_3, bench_index_build);
criterion_main!(benches);
