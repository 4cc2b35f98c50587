//! Live workspace adapter over the folders the editor launched us with.

use std::path::PathBuf;

use crate::ports::workspace::Workspace;

/// Workspace folders fixed at startup from configuration.
pub struct LiveWorkspace {
    folders: Vec<PathBuf>,
}

impl LiveWorkspace {
    /// Creates a workspace with the given folders, in host order.
    #[must_use]
    pub fn new(folders: Vec<PathBuf>) -> Self {
        Self { folders }
    }
}

impl Workspace for LiveWorkspace {
    fn folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }
}
