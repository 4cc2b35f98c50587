//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{extract_result, next_output, path_input};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::{DirEntry, FileStat, FileSystem, FsFuture};

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_directory<'a>(&'a self, path: &'a Path) -> FsFuture<'a, Vec<DirEntry>> {
        let output = next_output(&self.replayer, "fs", "read_directory", Some(&path_input(path)));
        Box::pin(async move { extract_result(&output?, "fs::read_directory") })
    }

    fn stat<'a>(&'a self, path: &'a Path) -> FsFuture<'a, FileStat> {
        let output = next_output(&self.replayer, "fs", "stat", Some(&path_input(path)));
        Box::pin(async move { extract_result(&output?, "fs::stat") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::ports::EntryKind;
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            session: "s".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    #[tokio::test]
    async fn replays_directory_listing() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "read_directory".into(),
            input: json!({"path": "/proj"}),
            output: json!({"ok": [{"name": "src", "kind": "directory"}]}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        let entries = fs.read_directory(Path::new("/proj")).await.unwrap();
        assert_eq!(entries, vec![DirEntry::new("src", EntryKind::Directory)]);
    }

    #[tokio::test]
    async fn replays_stat_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "stat".into(),
            input: json!({"path": "/missing"}),
            output: json!({"err": "file not found"}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        let result = fs.stat(Path::new("/missing")).await;
        assert!(result.unwrap_err().to_string().contains("file not found"));
    }

    #[tokio::test]
    async fn walking_a_different_path_is_an_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "read_directory".into(),
            input: json!({"path": "/proj"}),
            output: json!({"ok": []}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);

        let err = fs.read_directory(Path::new("/other")).await.unwrap_err();
        assert!(err.to_string().contains("drifted"));
    }

    #[tokio::test]
    async fn running_past_the_recording_is_an_error() {
        let fs = ReplayingFileSystem::new(make_replayer(vec![]));
        let err = fs.stat(Path::new("/proj/a")).await.unwrap_err();
        assert!(err.to_string().contains("no fs::stat interactions"));
    }
}
