//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::{LineSink, LiveEditor, LiveFileSystem, LivePanel, LiveWorkspace};
use crate::adapters::recording::{
    RecordingEditor, RecordingFileSystem, RecordingPanel, RecordingWorkspace,
};
use crate::adapters::replaying::{
    ReplayingEditor, ReplayingFileSystem, ReplayingPanel, ReplayingWorkspace,
};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::{cassette_file, RecordingSession};
use crate::ports::{Editor, FileSystem, Panel, Workspace};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one slice of the host API. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// File system for directory listings and stats.
    pub fs: Box<dyn FileSystem>,
    /// Open workspace folders.
    pub workspace: Box<dyn Workspace>,
    /// Editor UI actions.
    pub editor: Box<dyn Editor>,
    /// The webview panel.
    pub panel: Box<dyn Panel>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(
        fs: Box<dyn FileSystem>,
        workspace: Box<dyn Workspace>,
        editor: Box<dyn Editor>,
        panel: Box<dyn Panel>,
    ) -> Self {
        Self { fs, workspace, editor, panel }
    }

    /// Creates a live context: real disk access, the given workspace
    /// folders, and editor/panel traffic written to `sink`.
    #[must_use]
    pub fn live(folders: Vec<PathBuf>, sink: &LineSink) -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            workspace: Box::new(LiveWorkspace::new(folders)),
            editor: Box::new(LiveEditor::new(sink.clone())),
            panel: Box::new(LivePanel::new(sink.clone())),
        }
    }

    /// Creates a live context whose every port interaction is captured by
    /// `session`.
    ///
    /// The context must be dropped before [`RecordingSession::finish`] is
    /// called, since each adapter holds a handle to its recorder.
    #[must_use]
    pub fn recording(folders: Vec<PathBuf>, sink: &LineSink, session: &RecordingSession) -> Self {
        let live = Self::live(folders, sink);
        Self {
            fs: Box::new(RecordingFileSystem::new(live.fs, Arc::clone(&session.fs))),
            workspace: Box::new(RecordingWorkspace::new(
                live.workspace,
                Arc::clone(&session.workspace),
            )),
            editor: Box::new(RecordingEditor::new(live.editor, Arc::clone(&session.editor))),
            panel: Box::new(RecordingPanel::new(live.panel, Arc::clone(&session.panel))),
        }
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so per-port
    /// tracks are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            workspace: Box::new(ReplayingWorkspace::new(CassetteReplayer::new(&cassette))),
            editor: Box::new(ReplayingEditor::new(CassetteReplayer::new(&cassette))),
            panel: Box::new(ReplayingPanel::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from a directory of per-port cassettes,
    /// as written by a [`RecordingSession`].
    ///
    /// # Errors
    ///
    /// Returns an error if any of the four cassette files is missing or
    /// cannot be parsed.
    pub fn replaying_dir(dir: &Path) -> Result<Self, String> {
        let load = |port: &str| -> Result<CassetteReplayer, String> {
            Cassette::load(&dir.join(cassette_file(port))).map(|c| CassetteReplayer::new(&c))
        };
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(load("fs")?)),
            workspace: Box::new(ReplayingWorkspace::new(load("workspace")?)),
            editor: Box::new(ReplayingEditor::new(load("editor")?)),
            panel: Box::new(ReplayingPanel::new(load("panel")?)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    #[test]
    fn replaying_context_from_monolithic_cassette() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "test", "s");
        recorder.record("workspace", "folders", json!({}), json!(["/work/proj"]));
        recorder.record("editor", "show_warning", json!({"text": "hi"}), json!({"ok": null}));
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert_eq!(ctx.workspace.folders(), vec![PathBuf::from("/work/proj")]);
        assert!(ctx.editor.show_warning("hi").is_ok());
    }

    #[test]
    fn replaying_dir_requires_every_port_cassette() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceContext::replaying_dir(dir.path()).err().unwrap();
        assert!(err.contains("fs.cassette.yaml"));
    }
}
