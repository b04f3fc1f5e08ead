//! # ontograph-clone
//!
//! Isolated, mutable working copies of live graph snapshots.
//! One open clone per live graph; a clone ends in an atomic commit or a reject.
//! Also compares a clone against its live graph and applies review decisions.

pub mod diff;
pub mod handle;
pub mod manager;
pub mod review;
pub mod store;

pub use diff::{ElementChange, SnapshotDiff};
pub use handle::{CloneHandle, CloneStatus};
pub use manager::CloneManager;
pub use review::{ReviewDecision, ReviewOutcome};
pub use store::InMemorySnapshotStore;
