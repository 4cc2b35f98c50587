//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use super::{record_result, PathInput};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::filesystem::{DirEntry, FileStat, FileSystem, FsFuture};

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl FileSystem for RecordingFileSystem {
    fn read_directory<'a>(&'a self, path: &'a Path) -> FsFuture<'a, Vec<DirEntry>> {
        Box::pin(async move {
            let result = self.inner.read_directory(path).await;
            let input = PathInput { path: &path.display().to_string() };
            record_result(&self.recorder, "fs", "read_directory", &input, &result);
            result
        })
    }

    fn stat<'a>(&'a self, path: &'a Path) -> FsFuture<'a, FileStat> {
        Box::pin(async move {
            let result = self.inner.stat(path).await;
            let input = PathInput { path: &path.display().to_string() };
            record_result(&self.recorder, "fs", "stat", &input, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::cassette::format::Cassette;
    use serde_json::json;

    #[tokio::test]
    async fn records_listing_and_stat_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "abc").unwrap();
        let cassette_path = dir.path().join("fs.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test", "s")));

        // Scope the adapter so it's dropped before we try to unwrap
        {
            let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
            let _ = fs.stat(&dir.path().join("a.txt")).await;
            let _ = fs.stat(&dir.path().join("missing")).await;
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&cassette_path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].method, "stat");
        assert_eq!(cassette.interactions[0].output, json!({"ok": {"size": 3}}));
        assert!(cassette.interactions[1].output.get("err").is_some());
    }
}
