//! In-memory live snapshot store.

use std::collections::HashMap;
use std::sync::RwLock;

use ontograph_core::errors::{CloneError, OntographResult};
use ontograph_core::graph::GraphSnapshot;
use ontograph_core::traits::ISnapshotStore;

/// Live snapshots held in process memory, keyed by graph id.
///
/// `replace` swaps the whole snapshot under the write lock, so readers see
/// either the old or the new content, never a mix.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    graphs: RwLock<HashMap<String, GraphSnapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or overwrite) a live graph. The snapshot must be internally consistent.
    pub fn insert(&self, graph_id: &str, snapshot: GraphSnapshot) -> OntographResult<()> {
        snapshot.validate()?;
        let mut guard = self.graphs.write().map_err(poisoned)?;
        guard.insert(graph_id.to_string(), snapshot);
        Ok(())
    }

    pub fn with_graph(graph_id: &str, snapshot: GraphSnapshot) -> OntographResult<Self> {
        let store = Self::new();
        store.insert(graph_id, snapshot)?;
        Ok(store)
    }
}

impl ISnapshotStore for InMemorySnapshotStore {
    fn load(&self, graph_id: &str) -> OntographResult<Option<GraphSnapshot>> {
        let guard = self.graphs.read().map_err(poisoned)?;
        Ok(guard.get(graph_id).cloned())
    }

    fn replace(&self, graph_id: &str, snapshot: GraphSnapshot) -> OntographResult<()> {
        let mut guard = self.graphs.write().map_err(poisoned)?;
        match guard.get_mut(graph_id) {
            Some(live) => {
                *live = snapshot;
                Ok(())
            }
            None => Err(CloneError::GraphNotFound {
                graph_id: graph_id.to_string(),
            }
            .into()),
        }
    }

    fn graph_ids(&self) -> OntographResult<Vec<String>> {
        let guard = self.graphs.read().map_err(poisoned)?;
        let mut ids: Vec<String> = guard.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> CloneError {
    CloneError::LockPoisoned {
        details: e.to_string(),
    }
}
