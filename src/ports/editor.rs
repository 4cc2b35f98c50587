//! Editor port for host-side UI actions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PortResult;

/// Editor column a document or panel is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewColumn {
    /// The first editor column.
    One,
    /// The column beside the active one.
    Beside,
}

/// Options for [`Editor::show_text_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowOptions {
    /// Whether the document opens as a preview tab.
    pub preview: bool,
    /// Column the document is shown in.
    pub view_column: ViewColumn,
}

/// Host editor actions invoked on behalf of the visualization.
///
/// Failures are not handled by callers; they propagate to the host's
/// default error surface.
pub trait Editor: Send + Sync {
    /// Reveals a path in the host's file browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the request.
    fn reveal_in_explorer(&self, path: &Path) -> PortResult<()>;

    /// Opens a path as a text document.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the request.
    fn show_text_document(&self, path: &Path, options: ShowOptions) -> PortResult<()>;

    /// Writes text to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the request.
    fn write_clipboard(&self, text: &str) -> PortResult<()>;

    /// Shows a warning notification to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the request.
    fn show_warning(&self, message: &str) -> PortResult<()>;
}
