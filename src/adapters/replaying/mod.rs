//! Replaying adapters that serve recorded interactions.

pub mod editor;
pub mod filesystem;
pub mod panel;
pub mod workspace;

pub use editor::ReplayingEditor;
pub use filesystem::ReplayingFileSystem;
pub use panel::ReplayingPanel;
pub use workspace::ReplayingWorkspace;

use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortResult;

/// Takes the output of the next `port::method` interaction.
///
/// With `input`, the recorded input must match it exactly; a mismatch means
/// the replayed session has drifted from the recording.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
    input: Option<&Value>,
) -> PortResult<Value> {
    let mut replayer = replayer.lock().map_err(|e| format!("replayer lock poisoned: {e}"))?;
    let interaction = match input {
        Some(input) => replayer.next_matching(port, method, input)?,
        None => replayer.next_interaction(port, method)?,
    };
    Ok(interaction.output.clone())
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`.
pub(crate) fn extract_result<T: serde::de::DeserializeOwned>(
    output: &Value,
    context: &str,
) -> PortResult<T> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

/// Replays a unit-returning action, honoring recorded failures.
pub(crate) fn replay_unit(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
    input: Option<&Value>,
) -> PortResult<()> {
    let output = next_output(replayer, port, method, input)?;
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    Ok(())
}

/// Input recorded for calls that take a single path.
pub(crate) fn path_input(path: &Path) -> Value {
    json!({ "path": path.display().to_string() })
}

/// Serializes a call input the way the recording adapters do.
pub(crate) fn input_of<T: Serialize>(input: &T) -> PortResult<Value> {
    Ok(serde_json::to_value(input)?)
}
