//! Layered configuration: defaults, YAML file, environment, CLI flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tree::SnapshotMode;

/// Default location of the visualization app's dev server.
pub const DEFAULT_APP_URL: &str = "http://localhost:5173";

/// Default panel title.
pub const DEFAULT_PANEL_TITLE: &str = "Visual File";

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "visual-file.yaml";

/// Settings for one visualize session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL the webview's iframe loads.
    pub app_url: String,
    /// Title of the webview panel.
    pub panel_title: String,
    /// Fail `load-dir` instead of dropping unreadable entries.
    pub strict_snapshot: bool,
    /// Workspace folders, in host order.
    pub folders: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_url: DEFAULT_APP_URL.to_string(),
            panel_title: DEFAULT_PANEL_TITLE.to_string(),
            strict_snapshot: false,
            folders: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] if
    /// it exists, then applies process environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing, or if any
    /// config file cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parses a YAML config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))
    }

    /// Applies `VISUAL_FILE_*` overrides looked up through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("VISUAL_FILE_APP_URL") {
            self.app_url = url;
        }
        if let Some(title) = lookup("VISUAL_FILE_PANEL_TITLE") {
            self.panel_title = title;
        }
        if let Some(strict) = lookup("VISUAL_FILE_STRICT") {
            self.strict_snapshot = matches!(strict.trim(), "1" | "true" | "yes" | "on");
        }
    }

    /// Snapshot mode implied by `strict_snapshot`.
    #[must_use]
    pub fn snapshot_mode(&self) -> SnapshotMode {
        if self.strict_snapshot {
            SnapshotMode::Strict
        } else {
            SnapshotMode::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_local_dev_server() {
        let config = Config::default();
        assert_eq!(config.app_url, "http://localhost:5173");
        assert_eq!(config.panel_title, "Visual File");
        assert_eq!(config.snapshot_mode(), SnapshotMode::Lenient);
        assert!(config.folders.is_empty());
    }

    #[test]
    fn file_values_override_defaults_and_keep_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visual-file.yaml");
        std::fs::write(&path, "app_url: https://viz.example.com\nfolders: [/work/proj]\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.app_url, "https://viz.example.com");
        assert_eq!(config.panel_title, "Visual File");
        assert_eq!(config.folders, vec![PathBuf::from("/work/proj")]);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/no/such/visual-file.yaml"))).unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn env_overrides_take_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("VISUAL_FILE_APP_URL", "http://127.0.0.1:4000"),
            ("VISUAL_FILE_STRICT", "true"),
        ]);
        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.app_url, "http://127.0.0.1:4000");
        assert_eq!(config.panel_title, "Visual File");
        assert_eq!(config.snapshot_mode(), SnapshotMode::Strict);
    }
}
