//! Per-call working state of one assessment.

use std::collections::HashSet;

use ontograph_core::impact::Impact;

/// Bookkeeping owned by a single `assess_impact` call, never by the engine.
#[derive(Debug, Default)]
pub struct AssessmentContext {
    /// Entity ids already reported (or excluded) across indirect and ripple impacts.
    pub visited: HashSet<String>,
    pub direct: Vec<Impact>,
    pub indirect: Vec<Impact>,
    pub ripple: Vec<Impact>,
    /// Entity count before mutation.
    pub node_count: usize,
    /// Relationship count before mutation.
    pub edge_count: usize,
}

impl AssessmentContext {
    pub fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count,
            edge_count,
            ..Default::default()
        }
    }

    /// Mark an id as seen. Returns `false` if it was already seen.
    pub fn visit(&mut self, id: &str) -> bool {
        self.visited.insert(id.to_string())
    }
}
