//! Test fixture loader for Ontograph graph snapshots, golden reports, and
//! generated graphs used by integration tests, property tests, and benches.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use ontograph_core::graph::{Entity, GraphSnapshot, Relationship};
use ontograph_core::operation::Operation;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load `graphs/<name>.json` as a snapshot.
pub fn load_graph(name: &str) -> GraphSnapshot {
    load_fixture(&format!("graphs/{name}.json"))
}

/// Expected outcome of one assessment, stored under `golden/`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub description: String,
    /// Graph fixture name under `graphs/`.
    pub graph: String,
    pub operation: Operation,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    /// `(impact_type, element_id, severity)` of each direct impact, in order.
    pub direct: Vec<GoldenImpact>,
    /// Element ids of indirect impacts, in order.
    pub indirect: Vec<String>,
    /// depth → ripple element ids in discovery order.
    #[serde(default)]
    pub ripple: std::collections::BTreeMap<usize, Vec<String>>,
    pub total_affected: usize,
    #[serde(default)]
    pub by_type: std::collections::BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenImpact {
    pub impact_type: String,
    pub element_id: String,
    pub severity: String,
}

/// Load every golden case, sorted by file name.
pub fn golden_cases() -> Vec<(String, GoldenCase)> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let case = load_fixture(&format!("golden/{name}"));
            (name, case)
        })
        .collect()
}

// --- Generated graphs ---

/// `n0 – n1 – … – n{len-1}`, edges `r{i}: n{i} → n{i+1}`.
pub fn chain_graph(len: usize) -> GraphSnapshot {
    let entities = (0..len)
        .map(|i| Entity::new(format!("n{i}"), "Node", format!("Node {i}")))
        .collect();
    let relationships = (1..len)
        .map(|i| {
            Relationship::new(
                format!("r{}", i - 1),
                format!("n{}", i - 1),
                format!("n{i}"),
                "NEXT",
            )
        })
        .collect();
    GraphSnapshot::from_parts(entities, relationships)
}

/// A hub `hub` linked to `spokes` leaves `leaf{i}`.
pub fn star_graph(spokes: usize) -> GraphSnapshot {
    let mut entities = vec![Entity::new("hub", "Hub", "Hub")];
    entities.extend(
        (0..spokes).map(|i| Entity::new(format!("leaf{i}"), "Leaf", format!("Leaf {i}"))),
    );
    let relationships = (0..spokes)
        .map(|i| Relationship::new(format!("spoke{i}"), "hub", format!("leaf{i}"), "HAS"))
        .collect();
    GraphSnapshot::from_parts(entities, relationships)
}

/// Deterministic pseudo-random graph: `entities` nodes, each linked forward to
/// `fanout` others chosen by a linear congruential sequence seeded by `seed`.
pub fn generated_graph(entities: usize, fanout: usize, seed: u64) -> GraphSnapshot {
    let nodes: Vec<Entity> = (0..entities)
        .map(|i| {
            Entity::new(
                format!("e{i}"),
                ENTITY_TYPES[i % ENTITY_TYPES.len()],
                format!("Entity {i}"),
            )
        })
        .collect();

    let mut state = seed;
    let mut relationships = Vec::new();
    if entities > 1 {
        for i in 0..entities {
            for k in 0..fanout {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let target = (state >> 33) as usize % entities;
                if target == i {
                    continue;
                }
                relationships.push(Relationship::new(
                    format!("r{i}_{k}"),
                    format!("e{i}"),
                    format!("e{target}"),
                    RELATION_TYPES[k % RELATION_TYPES.len()],
                ));
            }
        }
    }
    GraphSnapshot::from_parts(nodes, relationships)
}

const ENTITY_TYPES: [&str; 4] = ["Person", "Company", "Product", "City"];
const RELATION_TYPES: [&str; 3] = ["WORKS_AT", "MAKES", "LOCATED_IN"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_graph_fixtures_are_consistent() {
        let graphs = list_fixtures("graphs");
        assert!(graphs.len() >= 3);
        for path in graphs {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let snapshot = load_graph(&name);
            snapshot
                .validate()
                .unwrap_or_else(|e| panic!("graph fixture {name} is inconsistent: {e}"));
        }
    }

    #[test]
    fn golden_cases_reference_existing_graphs() {
        let cases = golden_cases();
        assert!(!cases.is_empty());
        for (name, case) in cases {
            assert!(
                fixture_exists(&format!("graphs/{}.json", case.graph)),
                "{name} references missing graph {}",
                case.graph
            );
        }
    }

    #[test]
    fn generated_graph_is_deterministic_and_valid() {
        let a = generated_graph(200, 3, 7);
        let b = generated_graph(200, 3, 7);
        assert_eq!(a, b);
        a.validate().unwrap();
        assert_eq!(a.entity_count(), 200);
    }

    #[test]
    fn chain_and_star_shapes() {
        assert_eq!(chain_graph(4).relationship_count(), 3);
        assert_eq!(star_graph(5).relationship_count(), 5);
        chain_graph(1).validate().unwrap();
    }
}
