//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `visual-file`.
#[derive(Debug, Parser)]
#[command(name = "visual-file", version, about = "Visualize a workspace folder in an editor panel")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the visualization panel and relay webview messages over stdio.
    Visualize {
        /// Workspace folder; repeat for each folder the editor has open.
        #[arg(long = "folder", value_name = "DIR")]
        folders: Vec<PathBuf>,
        /// Config file (defaults to ./visual-file.yaml when present).
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// URL of the visualization app.
        #[arg(long, value_name = "URL")]
        app_url: Option<String>,
        /// Refuse to post incomplete snapshots.
        #[arg(long)]
        strict: bool,
    },
    /// Print a JSON snapshot of a directory tree.
    Snapshot {
        /// Directory to walk.
        dir: PathBuf,
        /// Fail if any entry cannot be read.
        #[arg(long)]
        strict: bool,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the HTML document loaded into the panel.
    Html {
        /// Config file (defaults to ./visual-file.yaml when present).
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// URL of the visualization app.
        #[arg(long, value_name = "URL")]
        app_url: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_repeated_folders() {
        let cli = Cli::parse_from(["visual-file", "visualize", "--folder", "/a", "--folder", "/b"]);
        match cli.command {
            Command::Visualize { folders, strict, .. } => {
                assert_eq!(folders, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
                assert!(!strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_snapshot_flags() {
        let cli = Cli::parse_from(["visual-file", "snapshot", "/tmp", "--strict", "--pretty"]);
        assert!(matches!(
            cli.command,
            Command::Snapshot { strict: true, pretty: true, ref dir } if dir == &PathBuf::from("/tmp")
        ));
    }

    #[test]
    fn snapshot_requires_a_directory() {
        assert!(Cli::try_parse_from(["visual-file", "snapshot"]).is_err());
    }
}
