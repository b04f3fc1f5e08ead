//! Traversal index over a graph snapshot.

pub mod indexed_graph;

pub use indexed_graph::{EntityNode, IndexedGraph, RelationEdge};
