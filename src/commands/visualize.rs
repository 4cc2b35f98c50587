//! `visualize` command: open the panel and relay messages over stdio.

use std::env;
use std::path::PathBuf;

use tokio::io::BufReader;
use tracing::info;

use super::{block_on, RECORD_ENV};
use crate::adapters::live::LineSink;
use crate::cassette::session::RecordingSession;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::paths::absolutize;
use crate::relay;
use crate::session::Session;

/// Command-line overrides for a visualize session.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Workspace folders; replaces any configured folders when non-empty.
    pub folders: Vec<PathBuf>,
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// App URL override.
    pub app_url: Option<String>,
    /// Force strict snapshots.
    pub strict: bool,
}

/// Resolves the effective configuration: file and environment first, then
/// command-line flags on top. Workspace folders come out absolute.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or a relative
/// folder cannot be made absolute.
pub fn resolve_config(options: &Options) -> Result<Config, String> {
    let mut config = Config::load(options.config.as_deref())?;
    if !options.folders.is_empty() {
        config.folders.clone_from(&options.folders);
    }
    if let Some(url) = &options.app_url {
        config.app_url.clone_from(url);
    }
    if options.strict {
        config.strict_snapshot = true;
    }
    config.folders = config
        .folders
        .iter()
        .map(|folder| {
            absolutize(folder)
                .map_err(|e| format!("Failed to resolve folder {}: {e}", folder.display()))
        })
        .collect::<Result<_, _>>()?;
    Ok(config)
}

/// Runs a visualize session until stdin closes.
///
/// # Errors
///
/// Returns an error if configuration, panel creation, reading stdin, or
/// writing cassettes fails.
pub fn run(options: &Options) -> Result<(), String> {
    let config = resolve_config(options)?;
    let sink = LineSink::stdout();

    let recording = match env::var(RECORD_ENV) {
        Ok(dir) => Some(RecordingSession::new(&PathBuf::from(dir), "visualize")?),
        Err(_) => None,
    };
    let ctx = match &recording {
        Some(session) => ServiceContext::recording(config.folders.clone(), &sink, session),
        None => ServiceContext::live(config.folders.clone(), &sink),
    };

    let session = Session::open(ctx, config).map_err(|e| e.to_string())?;
    let stats = block_on(relay::run(&session, BufReader::new(tokio::io::stdin())))?
        .map_err(|e| format!("Failed to read from host: {e}"))?;
    info!(?stats, "relay finished");

    // Adapters hold recorder handles; release them before finishing.
    drop(session);
    if let Some(recording) = recording {
        let dir = recording.finish()?;
        eprintln!("Recording saved to: {}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_configured_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visual-file.yaml");
        std::fs::write(&path, "app_url: http://from-file\nfolders: [/configured]\n").unwrap();

        let options = Options {
            folders: vec![PathBuf::from("/flag")],
            config: Some(path),
            app_url: None,
            strict: true,
        };
        let config = resolve_config(&options).unwrap();

        assert_eq!(config.folders, vec![PathBuf::from("/flag")]);
        assert!(config.strict_snapshot);
    }

    #[test]
    fn relative_folders_are_made_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visual-file.yaml");
        std::fs::write(&path, "folders: [configured/./proj]\n").unwrap();

        let options = Options { config: Some(path), ..Options::default() };
        let config = resolve_config(&options).unwrap();

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(config.folders, vec![cwd.join("configured/proj")]);
    }
}
