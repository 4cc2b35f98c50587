//! `html` command: print the panel's HTML shell.

use std::path::Path;

use crate::config::Config;
use crate::webview;

/// Prints the webview document for the configured app URL.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded.
pub fn run(config_path: Option<&Path>, app_url: Option<String>) -> Result<(), String> {
    let mut config = Config::load(config_path)?;
    if let Some(url) = app_url {
        config.app_url = url;
    }
    print!("{}", webview::render(&config.app_url, &config.panel_title));
    Ok(())
}
