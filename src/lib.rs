//! Backend for the Visual File editor panel.
//!
//! Builds directory-tree snapshots of the open workspace folder and relays
//! a small command vocabulary between the embedded visualization app and
//! the editor host. The host's plugin API is reached through the traits in
//! [`ports`]; [`adapters`] provides live, recording, and replaying
//! implementations.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod paths;
pub mod ports;
pub mod protocol;
pub mod relay;
pub mod session;
pub mod tree;
pub mod webview;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_prints_html() {
        let result = run(["visual-file", "html", "--app-url", "http://localhost:1"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["visual-file", "unknown"]);
        assert!(result.is_err());
    }
}
