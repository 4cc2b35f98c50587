//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use super::recorder::CassetteRecorder;

/// Port names, in the order cassette files are written.
pub const PORTS: [&str; 4] = ["fs", "workspace", "editor", "panel"];

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to `<port>.cassette.yaml` inside
/// a timestamped directory.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for workspace interactions.
    pub workspace: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for editor interactions.
    pub editor: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for panel interactions.
    pub panel: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session under `root/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cassette directory already exists
    /// - The directory cannot be created
    pub fn new(root: &Path, session_id: &str) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make_recorder = |port: &str| -> Arc<Mutex<CassetteRecorder>> {
            let path = output_dir.join(cassette_file(port));
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::new(path, name, session_id)))
        };

        Ok(Self {
            fs: make_recorder("fs"),
            workspace: make_recorder("workspace"),
            editor: make_recorder("editor"),
            panel: make_recorder("panel"),
            output_dir,
        })
    }

    /// Directory the cassette files are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a recording adapter is still alive or any
    /// cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.fs, "fs")?;
        finish_one(self.workspace, "workspace")?;
        finish_one(self.editor, "editor")?;
        finish_one(self.panel, "panel")?;

        info!(dir = %self.output_dir.display(), "cassettes written");
        Ok(self.output_dir)
    }
}

/// File name of the cassette for `port`.
#[must_use]
pub fn cassette_file(port: &str) -> String {
    format!("{port}.cassette.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_writes_one_cassette_per_port() {
        let root = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(root.path(), "abc").unwrap();
        let dir = session.output_dir().to_path_buf();
        assert!(dir.exists());

        let finished = session.finish().unwrap();
        assert_eq!(finished, dir);
        for port in PORTS {
            assert!(dir.join(cassette_file(port)).exists(), "missing cassette for {port}");
        }
    }

    #[test]
    fn finish_fails_while_an_adapter_holds_a_recorder() {
        let root = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(root.path(), "abc").unwrap();
        let _held = Arc::clone(&session.panel);

        let err = session.finish().unwrap_err();
        assert!(err.contains("panel still has references"));
    }
}
