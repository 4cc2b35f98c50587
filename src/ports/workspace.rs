//! Workspace port for enumerating open workspace folders.

use std::path::PathBuf;

/// Enumerates the workspace folders open in the host editor.
pub trait Workspace: Send + Sync {
    /// Returns the open workspace folders, in host order.
    ///
    /// An empty list means no workspace is open.
    fn folders(&self) -> Vec<PathBuf>;
}
