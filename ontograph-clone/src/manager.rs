//! CloneManager: opens, hands out, commits, and rejects graph clones.
//! Enforces the single-open-clone-per-graph rule.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, info, warn};

use ontograph_core::errors::{CloneError, ImpactError, OntographError, OntographResult};
use ontograph_core::graph::GraphSnapshot;
use ontograph_core::traits::{IdGenerator, ISnapshotStore, UuidGenerator};

use crate::diff::SnapshotDiff;
use crate::handle::{CloneHandle, CloneStatus};

/// Working state of one clone, guarded by a single lock.
struct Working {
    snapshot: GraphSnapshot,
    assessed: bool,
}

/// An isolated deep copy of a live snapshot.
struct GraphClone {
    handle: CloneHandle,
    opened_at: DateTime<Utc>,
    working: RwLock<Working>,
}

/// Owns every open clone and the live snapshot store they were copied from.
pub struct CloneManager {
    store: Arc<dyn ISnapshotStore>,
    ids: Arc<dyn IdGenerator>,
    /// clone_id → clone.
    clones: DashMap<String, Arc<GraphClone>>,
    /// graph_id → clone_id of its single open clone.
    active: DashMap<String, String>,
}

impl CloneManager {
    pub fn new(store: Arc<dyn ISnapshotStore>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(store: Arc<dyn ISnapshotStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            clones: DashMap::new(),
            active: DashMap::new(),
        }
    }

    /// The live snapshot store.
    pub fn store(&self) -> &Arc<dyn ISnapshotStore> {
        &self.store
    }

    // --- Lifecycle ---

    /// Deep-copy the live snapshot of `graph_id` into a new clone.
    ///
    /// Fails with `CloneConflict` if the graph already has an open clone.
    pub fn open(&self, graph_id: &str) -> OntographResult<CloneHandle> {
        if let Some(existing) = self.active.get(graph_id) {
            warn!(graph_id, clone_id = %existing.value(), "clone already open for graph");
            return Err(conflict(graph_id, existing.value()).into());
        }

        // The store is read outside the entry lock; the entry is rechecked below.
        let snapshot = self
            .store
            .load(graph_id)?
            .ok_or_else(|| CloneError::GraphNotFound {
                graph_id: graph_id.to_string(),
            })?;

        match self.active.entry(graph_id.to_string()) {
            Entry::Occupied(existing) => {
                warn!(graph_id, clone_id = %existing.get(), "clone already open for graph");
                Err(conflict(graph_id, existing.get()).into())
            }
            Entry::Vacant(slot) => {
                let clone_id = format!("{graph_id}_copy_{}", self.ids.next_id());
                let handle = CloneHandle::new(clone_id.clone(), graph_id.to_string());
                info!(
                    graph_id,
                    clone_id = %clone_id,
                    entities = snapshot.entity_count(),
                    relationships = snapshot.relationship_count(),
                    "opened graph clone"
                );

                self.clones.insert(
                    clone_id.clone(),
                    Arc::new(GraphClone {
                        handle: handle.clone(),
                        opened_at: Utc::now(),
                        working: RwLock::new(Working {
                            snapshot,
                            assessed: false,
                        }),
                    }),
                );
                slot.insert(clone_id);
                Ok(handle)
            }
        }
    }

    /// Replace the live snapshot with the clone's content and close the clone.
    ///
    /// All-or-nothing: if the store rejects the write, the clone stays open
    /// and the live snapshot is untouched.
    pub fn commit(&self, handle: &CloneHandle) -> OntographResult<()> {
        let (clone_id, clone) = self.take(handle)?;
        let graph_id = clone.handle.graph_id().to_string();

        let read = clone
            .working
            .read()
            .map(|guard| guard.snapshot.clone())
            .map_err(|e| e.to_string());
        let snapshot = match read {
            Ok(snapshot) => snapshot,
            Err(details) => {
                self.clones.insert(clone_id, clone);
                return Err(CloneError::LockPoisoned { details }.into());
            }
        };

        let written = snapshot
            .validate()
            .map_err(OntographError::from)
            .and_then(|()| self.store.replace(&graph_id, snapshot));
        if let Err(e) = written {
            warn!(clone_id = %clone_id, error = %e, "commit failed; clone left open");
            self.clones.insert(clone_id, clone);
            return Err(e);
        }

        self.active.remove_if(&graph_id, |_, open| *open == clone_id);
        info!(clone_id = %clone_id, graph_id = %graph_id, "committed graph clone");
        Ok(())
    }

    /// Discard the clone. The live snapshot is never touched.
    pub fn reject(&self, handle: &CloneHandle) -> OntographResult<()> {
        let (clone_id, clone) = self.take(handle)?;
        let graph_id = clone.handle.graph_id();
        self.active.remove_if(graph_id, |_, open| *open == clone_id);
        info!(clone_id = %clone_id, graph_id, "rejected graph clone");
        Ok(())
    }

    /// The open clone of `graph_id`, if any.
    pub fn get_active(&self, graph_id: &str) -> Option<CloneHandle> {
        let clone_id = self.active.get(graph_id)?.value().clone();
        self.clones.get(&clone_id).map(|c| c.handle.clone())
    }

    pub fn is_open(&self, handle: &CloneHandle) -> bool {
        self.get(handle).is_ok()
    }

    pub fn open_count(&self) -> usize {
        self.clones.len()
    }

    pub fn status(&self, handle: &CloneHandle) -> OntographResult<CloneStatus> {
        let clone = self.get(handle)?;
        let guard = clone.working.read().map_err(poisoned)?;
        Ok(CloneStatus {
            handle: clone.handle.clone(),
            opened_at: clone.opened_at,
            assessed: guard.assessed,
            entity_count: guard.snapshot.entity_count(),
            relationship_count: guard.snapshot.relationship_count(),
        })
    }

    // --- Working snapshot access ---

    /// A copy of the clone's current working snapshot.
    pub fn snapshot(&self, handle: &CloneHandle) -> OntographResult<GraphSnapshot> {
        self.with_snapshot(handle, GraphSnapshot::clone)
    }

    /// Read the working snapshot in place.
    pub fn with_snapshot<R>(
        &self,
        handle: &CloneHandle,
        f: impl FnOnce(&GraphSnapshot) -> R,
    ) -> OntographResult<R> {
        let clone = self.get(handle)?;
        let guard = clone.working.read().map_err(poisoned)?;
        Ok(f(&guard.snapshot))
    }

    /// Mutate the working snapshot in place, holding the clone's write lock for
    /// the whole closure.
    pub fn with_snapshot_mut<R>(
        &self,
        handle: &CloneHandle,
        f: impl FnOnce(&mut GraphSnapshot) -> R,
    ) -> OntographResult<R> {
        let clone = self.get(handle)?;
        let mut guard = clone.working.write().map_err(poisoned)?;
        Ok(f(&mut guard.snapshot))
    }

    /// Run the single assessment a clone allows.
    ///
    /// `f` gets exclusive access to the working snapshot. A second assessment
    /// on the same clone fails with `InvalidOperation`. If `f` fails, the clone
    /// stays unassessed; `f` must leave the snapshot unchanged in that case.
    pub fn with_assessment<R>(
        &self,
        handle: &CloneHandle,
        f: impl FnOnce(&mut GraphSnapshot) -> OntographResult<R>,
    ) -> OntographResult<R> {
        let clone = self.get(handle)?;
        let mut guard = clone.working.write().map_err(poisoned)?;
        if guard.assessed {
            return Err(ImpactError::invalid(format!(
                "clone {} has already been assessed",
                handle.clone_id()
            ))
            .into());
        }
        let result = f(&mut guard.snapshot)?;
        guard.assessed = true;
        debug!(clone_id = handle.clone_id(), "clone marked assessed");
        Ok(result)
    }

    /// Compare the clone's working snapshot against the live snapshot.
    pub fn diff(&self, handle: &CloneHandle) -> OntographResult<SnapshotDiff> {
        let clone = self.get(handle)?;
        let graph_id = clone.handle.graph_id();
        let live = self
            .store
            .load(graph_id)?
            .ok_or_else(|| CloneError::GraphNotFound {
                graph_id: graph_id.to_string(),
            })?;
        let guard = clone.working.read().map_err(poisoned)?;
        Ok(SnapshotDiff::compare(&live, &guard.snapshot))
    }

    /// Resolve an open clone. A handle only matches the clone it was issued
    /// for: same clone id and same graph id.
    fn get(&self, handle: &CloneHandle) -> OntographResult<Arc<GraphClone>> {
        self.clones
            .get(handle.clone_id())
            .filter(|c| c.handle == *handle)
            .map(|c| Arc::clone(c.value()))
            .ok_or_else(|| not_found(handle).into())
    }

    /// Remove an open clone from the registry, under the same matching rule
    /// as [`Self::get`].
    fn take(&self, handle: &CloneHandle) -> OntographResult<(String, Arc<GraphClone>)> {
        self.clones
            .remove_if(handle.clone_id(), |_, c| c.handle == *handle)
            .ok_or_else(|| not_found(handle).into())
    }
}

fn not_found(handle: &CloneHandle) -> CloneError {
    CloneError::CloneNotFound {
        clone_id: handle.clone_id().to_string(),
    }
}

fn conflict(graph_id: &str, clone_id: &str) -> CloneError {
    CloneError::CloneConflict {
        graph_id: graph_id.to_string(),
        clone_id: clone_id.to_string(),
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> CloneError {
    CloneError::LockPoisoned {
        details: e.to_string(),
    }
}
