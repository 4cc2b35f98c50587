//! Directory-tree snapshots of a workspace folder.

pub mod node;
pub mod snapshot;

pub use node::Node;
pub use snapshot::{snapshot, Snapshot, SnapshotMode, TraversalFailure};
