//! Directory-tree snapshot nodes.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One entry in a directory-tree snapshot.
///
/// Each directory exclusively owns its children, so a snapshot is a plain
/// finite tree with no shared or cyclic references. Children keep the order
/// the host listing returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// A non-directory entry.
    File {
        /// Entry name within its parent directory.
        name: String,
        /// Size in bytes as reported by the host.
        size: u64,
    },
    /// A directory and its readable descendants.
    Directory {
        /// Entry name within its parent directory.
        name: String,
        /// Child entries in listing order.
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a file node.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::File { name: name.into(), size }
    }

    /// Creates a directory node.
    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Directory { name: name.into(), children }
    }

    /// Returns the entry name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Directory { name, .. } => name,
        }
    }

    /// Returns `true` for directory nodes.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Returns the children of a directory, or an empty slice for a file.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::File { .. } => &[],
            Self::Directory { children, .. } => children,
        }
    }

    /// Looks up a direct child by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// Nesting depth: 0 for a file, 1 + deepest child for a directory.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::File { .. } => 0,
            Self::Directory { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    /// Number of file nodes in this subtree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        match self {
            Self::File { .. } => 1,
            Self::Directory { children, .. } => children.iter().map(Node::file_count).sum(),
        }
    }

    /// Sum of all file sizes in this subtree.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        match self {
            Self::File { size, .. } => *size,
            Self::Directory { children, .. } => children.iter().map(Node::total_size).sum(),
        }
    }
}

/// Name used for a directory node: its last path segment, or the whole
/// path text when there is none (e.g. `/`).
#[must_use]
pub fn directory_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}
