//! Command dispatch and handlers.

pub mod html;
pub mod snapshot;
pub mod visualize;

use std::future::Future;

use crate::cli::Command;

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "VISUAL_FILE_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `VISUAL_FILE_RECORD` is set to a directory path, all host port
/// interactions of a visualize session are recorded to per-port cassette
/// files under that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: Command) -> Result<(), String> {
    match command {
        Command::Visualize { folders, config, app_url, strict } => {
            visualize::run(&visualize::Options { folders, config, app_url, strict })
        }
        Command::Snapshot { dir, strict, pretty } => snapshot::run(&dir, strict, pretty),
        Command::Html { config, app_url } => html::run(config.as_deref(), app_url),
    }
}

/// Runs a future to completion on a single-threaded runtime.
///
/// The host delivers one message at a time.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    Ok(runtime.block_on(future))
}
