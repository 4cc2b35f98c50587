//! Recursive directory walk producing a [`Node`] tree.
//!
//! The walk is sequential: each listing and stat call is awaited before the
//! next one starts, so siblings are never read concurrently. Entries that
//! cannot be read are dropped from their parent and collected as
//! [`TraversalFailure`]s instead of aborting the walk.

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::node::{directory_name, Node};
use crate::error::{PortError, SnapshotError};
use crate::ports::{EntryKind, FileSystem};

/// How the snapshotter treats entries it could not read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotMode {
    /// Drop unreadable entries and keep going.
    #[default]
    Lenient,
    /// Fail with the full list of unreadable entries.
    Strict,
}

/// An entry that was omitted from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalFailure {
    /// Path of the omitted entry.
    pub path: PathBuf,
    /// Host error message.
    pub message: String,
}

impl fmt::Display for TraversalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Result of a lenient walk: the tree plus everything that was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Root directory node.
    pub root: Node,
    /// Entries omitted because they could not be read.
    pub failures: Vec<TraversalFailure>,
}

impl Snapshot {
    /// Returns `true` when no entry was dropped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<Node, PortError>> + Send + 'a>>;

/// Builds a snapshot of `root` and all of its readable descendants.
///
/// # Errors
///
/// Returns [`SnapshotError::Root`] if `root` cannot be listed, and in
/// [`SnapshotMode::Strict`] returns [`SnapshotError::Incomplete`] if any
/// descendant could not be read.
pub async fn snapshot(
    fs: &dyn FileSystem,
    root: &Path,
    mode: SnapshotMode,
) -> Result<Snapshot, SnapshotError> {
    let mut failures = Vec::new();
    let root_node = walk(fs, root, &mut failures).await.map_err(|e| SnapshotError::Root {
        path: root.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(
        root = %root.display(),
        files = root_node.file_count(),
        dropped = failures.len(),
        "snapshot built"
    );

    if mode == SnapshotMode::Strict && !failures.is_empty() {
        return Err(SnapshotError::Incomplete { failures });
    }
    Ok(Snapshot { root: root_node, failures })
}

fn walk<'a>(
    fs: &'a dyn FileSystem,
    dir: &'a Path,
    failures: &'a mut Vec<TraversalFailure>,
) -> WalkFuture<'a> {
    Box::pin(async move {
        let entries = fs.read_directory(dir).await?;
        let mut children = Vec::with_capacity(entries.len());

        for entry in entries {
            let path = dir.join(&entry.name);
            let child = if entry.kind == EntryKind::Directory {
                walk(fs, &path, failures).await
            } else {
                fs.stat(&path).await.map(|stat| Node::file(entry.display_name(), stat.size))
            };

            match child {
                Ok(node) => children.push(node),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "dropping unreadable entry");
                    failures.push(TraversalFailure { path, message: e.to_string() });
                }
            }
        }

        Ok(Node::directory(directory_name(dir), children))
    })
}
