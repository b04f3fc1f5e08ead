//! petgraph::StableGraph view of a GraphSnapshot, with id → NodeIndex lookup.

use std::collections::{BTreeSet, HashMap};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

use ontograph_core::graph::GraphSnapshot;

/// A node in the traversal graph, representing an entity.
#[derive(Debug, Clone)]
pub struct EntityNode {
    pub entity_id: String,
    pub entity_type: String,
}

/// Weight on a traversal edge, representing a relationship.
#[derive(Debug, Clone)]
pub struct RelationEdge {
    pub edge_id: String,
    pub relation_type: String,
}

/// The underlying directed graph type.
pub type EntityStableGraph = StableGraph<EntityNode, RelationEdge, Directed>;

/// Indexed, read-only traversal structure built from one snapshot.
///
/// Edges keep their direction, but impact propagation treats them as
/// undirected: see [`IndexedGraph::neighbors`].
pub struct IndexedGraph {
    pub graph: EntityStableGraph,
    /// entity_id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Build the traversal graph from a snapshot. Relationships whose
    /// endpoints are missing are skipped.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
        let mut indexed = Self::new();
        for entity in &snapshot.entities {
            indexed.ensure_node(&entity.id, &entity.entity_type);
        }
        for relationship in &snapshot.relationships {
            let (Some(source), Some(target)) = (
                indexed.get_node(&relationship.source_id),
                indexed.get_node(&relationship.target_id),
            ) else {
                continue;
            };
            indexed.graph.add_edge(
                source,
                target,
                RelationEdge {
                    edge_id: relationship.id.clone(),
                    relation_type: relationship.relation_type.clone(),
                },
            );
        }
        indexed
    }

    /// Get or create a node for the given entity.
    pub fn ensure_node(&mut self, entity_id: &str, entity_type: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(entity_id) {
            return idx;
        }
        let idx = self.graph.add_node(EntityNode {
            entity_id: entity_id.to_string(),
            entity_type: entity_type.to_string(),
        });
        self.node_index.insert(entity_id.to_string(), idx);
        idx
    }

    pub fn get_node(&self, entity_id: &str) -> Option<NodeIndex> {
        self.node_index.get(entity_id).copied()
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.node_index.contains_key(entity_id)
    }

    /// Entities sharing at least one relationship with `entity_id`, in either
    /// direction, sorted by id. Parallel edges yield the neighbor once; a
    /// self-loop yields the entity itself.
    pub fn neighbors(&self, entity_id: &str) -> Vec<&str> {
        let Some(idx) = self.get_node(entity_id) else {
            return Vec::new();
        };
        let unique: BTreeSet<&str> = self
            .graph
            .neighbors_undirected(idx)
            .filter_map(|n| self.graph.node_weight(n))
            .map(|node| node.entity_id.as_str())
            .collect();
        unique.into_iter().collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}
