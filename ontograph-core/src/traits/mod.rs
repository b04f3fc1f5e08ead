//! Injectable capabilities at the seams of the core: id generation, time, persistence.

pub mod clock;
pub mod id_generator;
pub mod snapshot_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use snapshot_store::ISnapshotStore;
