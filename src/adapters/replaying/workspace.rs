//! Replaying adapter for the `Workspace` port.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::error;

use super::{extract_result, next_output};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::Workspace;

/// Replays recorded workspace folder lists from a cassette.
pub struct ReplayingWorkspace {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingWorkspace {
    /// Creates a new replaying workspace from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Workspace for ReplayingWorkspace {
    /// Replays the recorded folder list. A cassette that cannot answer is
    /// logged and read as an empty workspace.
    fn folders(&self) -> Vec<PathBuf> {
        next_output(&self.replayer, "workspace", "folders", None)
            .and_then(|output| extract_result(&output, "workspace::folders"))
            .unwrap_or_else(|e| {
                error!(error = %e, "workspace replay failed");
                Vec::new()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn replays_folders_then_reads_empty_when_exhausted() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            session: "s".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "workspace".into(),
                method: "folders".into(),
                input: json!({}),
                output: json!(["/proj"]),
            }],
        };
        let workspace = ReplayingWorkspace::new(CassetteReplayer::new(&cassette));

        assert_eq!(workspace.folders(), vec![PathBuf::from("/proj")]);
        assert!(workspace.folders().is_empty());
    }
}
