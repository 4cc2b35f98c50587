//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call on a host port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`fs`, `workspace`, `editor`, `panel`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments passed to the port.
    pub input: serde_json::Value,
    /// Value returned by the port, using the `ok`/`err` convention for results.
    pub output: serde_json::Value,
}

/// A named, timestamped sequence of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Session id of the recording run.
    pub session: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_yaml_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fs.cassette.yaml");
        std::fs::write(
            &path,
            "name: walk\n\
             recorded_at: 2025-03-15T14:30:00Z\n\
             session: s-1\n\
             interactions:\n\
             - seq: 0\n  port: fs\n  method: stat\n  input: {path: /proj/a}\n  output: {ok: {size: 7}}\n",
        )
        .unwrap();

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.name, "walk");
        assert_eq!(cassette.session, "s-1");
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].output, json!({"ok": {"size": 7}}));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(std::path::Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }
}
