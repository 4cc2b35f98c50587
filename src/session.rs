//! One visualize session: the panel, its host context, and command dispatch.
//!
//! A session is created per "visualize" invocation and owns everything the
//! relay needs, so no state lives in process-wide globals.

use std::path::PathBuf;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::{RelayError, SnapshotError};
use crate::paths::resolve_against_parent;
use crate::ports::{PanelSpec, ShowOptions, ViewColumn};
use crate::protocol::{AppMessage, HostMessage, Inbound};
use crate::tree::snapshot;
use crate::webview;

/// Identifies the panel type to the host.
pub const VIEW_TYPE: &str = "visual-file";

/// Warning shown when a load is requested with several workspace folders.
pub const MULTI_ROOT_WARNING: &str = "Only a single workspace folder is supported";

/// What happened to an inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A recognized command was carried out.
    Handled,
    /// The command is not part of the protocol; nothing was done.
    Ignored,
}

/// A live visualize session.
pub struct Session {
    id: String,
    config: Config,
    ctx: ServiceContext,
}

impl Session {
    /// Opens the webview panel and starts a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot create the panel.
    pub fn open(ctx: ServiceContext, config: Config) -> Result<Self, RelayError> {
        let id = Uuid::new_v4().to_string();
        let spec = PanelSpec {
            view_type: VIEW_TYPE.to_string(),
            title: config.panel_title.clone(),
            view_column: ViewColumn::One,
            enable_scripts: true,
            html: webview::render(&config.app_url, &config.panel_title),
        };
        ctx.panel.open(&spec).map_err(RelayError::host("create-panel"))?;
        info!(session = %id, app_url = %config.app_url, "panel opened");
        Ok(Self { id, config, ctx })
    }

    /// Unique id of this session.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Consumes the session, returning its host context.
    #[must_use]
    pub fn into_context(self) -> ServiceContext {
        self.ctx
    }

    /// Decodes and dispatches one inbound frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is malformed or the command fails.
    pub async fn handle_line(&self, frame: &str) -> Result<Dispatch, RelayError> {
        match Inbound::parse(frame)? {
            Inbound::Command(message) => {
                self.dispatch(message).await?;
                Ok(Dispatch::Handled)
            }
            Inbound::Unrecognized(command) => {
                debug!(session = %self.id, %command, "ignoring unrecognized command");
                Ok(Dispatch::Ignored)
            }
        }
    }

    /// Carries out a recognized command against the host.
    ///
    /// # Errors
    ///
    /// Returns an error if path resolution, the snapshot, or a host call
    /// fails. Host failures are passed through unhandled.
    pub async fn dispatch(&self, message: AppMessage) -> Result<(), RelayError> {
        debug!(session = %self.id, command = message.command(), "dispatching");
        match message {
            AppMessage::LoadDir => self.load_dir().await,
            AppMessage::Navigate(relative) => {
                let path = self.resolve(&relative)?;
                self.ctx
                    .editor
                    .reveal_in_explorer(&path)
                    .map_err(RelayError::host("reveal-in-explorer"))
            }
            AppMessage::Open(relative) => {
                let path = self.resolve(&relative)?;
                let options = ShowOptions { preview: false, view_column: ViewColumn::Beside };
                self.ctx
                    .editor
                    .show_text_document(&path, options)
                    .map_err(RelayError::host("show-text-document"))
            }
            AppMessage::CopyFullPath(relative) => {
                let path = self.resolve(&relative)?;
                self.ctx
                    .editor
                    .write_clipboard(&path.to_string_lossy())
                    .map_err(RelayError::host("write-clipboard"))
            }
        }
    }

    async fn load_dir(&self) -> Result<(), RelayError> {
        let folders = self.ctx.workspace.folders();
        let root = match folders.as_slice() {
            [] => {
                debug!(session = %self.id, "no workspace folder open, ignoring load-dir");
                return Ok(());
            }
            [root] => root,
            _ => {
                warn!(session = %self.id, folders = folders.len(), "multi-root workspace");
                return self
                    .ctx
                    .editor
                    .show_warning(MULTI_ROOT_WARNING)
                    .map_err(RelayError::host("show-warning"));
            }
        };

        let snap = match snapshot(self.ctx.fs.as_ref(), root, self.config.snapshot_mode()).await {
            Ok(snap) => snap,
            Err(SnapshotError::Incomplete { failures }) => {
                let message = format!(
                    "Could not read {} entries under {}",
                    failures.len(),
                    root.display()
                );
                self.ctx.editor.show_warning(&message).map_err(RelayError::host("show-warning"))?;
                return Err(SnapshotError::Incomplete { failures }.into());
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            session = %self.id,
            root = %root.display(),
            files = snap.root.file_count(),
            dropped = snap.failures.len(),
            "posting load-dir-result"
        );
        self.ctx
            .panel
            .post_message(&HostMessage::LoadDirResult(snap.root))
            .map_err(RelayError::host("post-message"))
    }

    /// Resolves a webview path against the first workspace folder's parent.
    fn resolve(&self, relative: &str) -> Result<PathBuf, RelayError> {
        let folders = self.ctx.workspace.folders();
        let root = folders.first().ok_or(RelayError::NoWorkspace)?;
        Ok(resolve_against_parent(root, relative)?)
    }
}
