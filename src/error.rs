//! Typed errors for the snapshotter, protocol, path resolution, replay and
//! relay.

use std::path::PathBuf;

use thiserror::Error;

use crate::tree::TraversalFailure;

/// Error type returned by every port method.
///
/// Ports sit on host-controlled APIs whose failure modes are opaque, so
/// they surface boxed errors and callers decide what to do with them.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Convenience alias for port results.
pub type PortResult<T> = Result<T, PortError>;

/// Errors produced while building a directory snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The root directory itself could not be listed.
    #[error("failed to list root directory {path}: {message}")]
    Root {
        /// Root that was requested.
        path: PathBuf,
        /// Host error message.
        message: String,
    },

    /// Strict mode only: one or more entries could not be read.
    #[error("snapshot incomplete: {} entries could not be read", failures.len())]
    Incomplete {
        /// Every entry that was dropped during the walk.
        failures: Vec<TraversalFailure>,
    },
}

/// A port call that a cassette could not answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    /// The cassette never recorded this port method.
    #[error("cassette has no {port}::{method} interactions (recorded: [{available}])")]
    Unrecorded {
        /// Port name.
        port: String,
        /// Method name.
        method: String,
        /// Comma-separated `port::method` pairs the cassette does hold.
        available: String,
    },

    /// Every recorded call for this port method was already served.
    #[error("cassette exhausted: all {count} {port}::{method} interactions were served")]
    Exhausted {
        /// Port name.
        port: String,
        /// Method name.
        method: String,
        /// Number of recorded interactions for the pair.
        count: usize,
    },

    /// The call arrived with different input than was recorded.
    #[error("{port}::{method} drifted at seq {seq}: recorded {recorded}, requested {requested}")]
    Drift {
        /// Port name.
        port: String,
        /// Method name.
        method: String,
        /// Sequence number of the recorded interaction.
        seq: u64,
        /// Input stored in the cassette.
        recorded: serde_json::Value,
        /// Input of the replayed call.
        requested: serde_json::Value,
    },
}

/// Errors produced while decoding an inbound webview frame.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The frame is not a JSON object.
    #[error("malformed frame: {0}")]
    Malformed(String),

    /// The frame has no string `command` field.
    #[error("frame has no command field")]
    MissingCommand,

    /// A recognized command carried a payload of the wrong shape.
    #[error("invalid payload for {command}: expected {expected}")]
    InvalidPayload {
        /// Command name as received.
        command: String,
        /// Description of the payload the command requires.
        expected: &'static str,
    },
}

/// Errors produced while resolving a relative path from the webview.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The workspace root has no parent directory to resolve against.
    #[error("workspace root {0} has no parent directory")]
    NoParent(PathBuf),

    /// The relative path walks above the directory it is resolved against.
    #[error("path {relative:?} escapes {base}")]
    Escapes {
        /// Directory the path was resolved against.
        base: PathBuf,
        /// Relative path as received.
        relative: String,
    },
}

/// Errors produced while dispatching a command.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The frame could not be decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A path command arrived while no workspace folder is open.
    #[error("no workspace folder is open")]
    NoWorkspace,

    /// A path payload could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The snapshot could not be built.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// A host API call failed.
    #[error("host {action} failed: {source}")]
    Host {
        /// Host action that was attempted.
        action: &'static str,
        /// Underlying port error.
        source: PortError,
    },
}

impl RelayError {
    /// Wraps a port error raised by the named host action.
    pub(crate) fn host(action: &'static str) -> impl FnOnce(PortError) -> Self {
        move |source| Self::Host { action, source }
    }
}
