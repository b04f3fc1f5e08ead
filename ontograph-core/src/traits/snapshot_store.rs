use crate::errors::OntographResult;
use crate::graph::GraphSnapshot;

/// Persistence boundary for live graph snapshots.
///
/// Accessed only when a clone is opened (`load`) and when it is committed
/// (`replace`), never during an assessment.
pub trait ISnapshotStore: Send + Sync {
    /// Current live snapshot of `graph_id`, or `None` if the graph is unknown.
    fn load(&self, graph_id: &str) -> OntographResult<Option<GraphSnapshot>>;

    /// Atomically replace the live snapshot of `graph_id`.
    fn replace(&self, graph_id: &str, snapshot: GraphSnapshot) -> OntographResult<()>;

    /// Ids of every graph the store knows.
    fn graph_ids(&self) -> OntographResult<Vec<String>>;
}
