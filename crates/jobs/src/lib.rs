//! Background jobs behind `merge-dns watch`: one poll job per source, the
//! snapshot store that owns both live snapshots, and the merge coordinator.
pub mod merge_coordinator;
pub mod runner;
pub mod snapshot_store;
pub mod source_poll;

pub use merge_coordinator::MergeCoordinator;
pub use runner::{JobRunner, WatchHandle};
pub use snapshot_store::{SnapshotHandle, SnapshotStore};
pub use source_poll::SourcePollJob;
