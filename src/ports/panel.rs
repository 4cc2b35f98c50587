//! Panel port for the embedded visualization surface.

use serde::{Deserialize, Serialize};

use super::editor::ViewColumn;
use crate::error::PortResult;
use crate::protocol::HostMessage;

/// Everything the host needs to create the webview panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSpec {
    /// Identifies the type of the webview.
    pub view_type: String,
    /// Title shown on the panel tab.
    pub title: String,
    /// Column the panel opens in.
    pub view_column: ViewColumn,
    /// Whether scripts may run inside the webview.
    pub enable_scripts: bool,
    /// Full HTML document loaded into the webview.
    pub html: String,
}

/// The webview panel hosting the visualization app.
pub trait Panel: Send + Sync {
    /// Creates and shows the panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot create the panel.
    fn open(&self, spec: &PanelSpec) -> PortResult<()>;

    /// Posts a message into the webview.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be delivered.
    fn post_message(&self, message: &HostMessage) -> PortResult<()>;
}
