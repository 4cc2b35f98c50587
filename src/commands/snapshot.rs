//! `snapshot` command: walk a directory and print its tree as JSON.

use std::path::Path;

use tracing::warn;

use super::block_on;
use crate::adapters::live::LiveFileSystem;
use crate::error::SnapshotError;
use crate::paths::absolutize;
use crate::tree::{self, SnapshotMode};

/// Prints the snapshot of `dir` to stdout.
///
/// Unreadable entries are logged and left out unless `strict` is set, in
/// which case they fail the command.
///
/// # Errors
///
/// Returns an error if `dir` cannot be listed, serialization fails, or
/// `strict` is set and some entries could not be read.
pub fn run(dir: &Path, strict: bool, pretty: bool) -> Result<(), String> {
    let mode = if strict { SnapshotMode::Strict } else { SnapshotMode::Lenient };
    let dir = absolutize(dir).map_err(|e| format!("Failed to resolve {}: {e}", dir.display()))?;
    let snap = block_on(tree::snapshot(&LiveFileSystem, &dir, mode))?.map_err(|e| match e {
        SnapshotError::Incomplete { failures } => {
            let listing: Vec<String> = failures.iter().map(ToString::to_string).collect();
            format!("Snapshot incomplete:\n  {}", listing.join("\n  "))
        }
        other => other.to_string(),
    })?;

    for failure in &snap.failures {
        warn!(path = %failure.path.display(), error = %failure.message, "skipped");
    }

    let json = if pretty {
        serde_json::to_string_pretty(&snap.root)
    } else {
        serde_json::to_string(&snap.root)
    }
    .map_err(|e| format!("Failed to serialize snapshot: {e}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&dir.path().join("missing"), false, false).unwrap_err();
        assert!(err.contains("failed to list root directory"));
    }

    #[test]
    fn existing_directory_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a"), "x").unwrap();
        assert!(run(dir.path(), true, true).is_ok());
    }
}
