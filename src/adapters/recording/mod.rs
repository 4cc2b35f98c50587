//! Recording adapters that capture interactions to cassettes.

pub mod editor;
pub mod filesystem;
pub mod panel;
pub mod workspace;

pub use editor::RecordingEditor;
pub use filesystem::RecordingFileSystem;
pub use panel::RecordingPanel;
pub use workspace::RecordingWorkspace;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::{encode, CassetteRecorder};

/// Input recorded for calls that take a single path.
#[derive(Serialize)]
pub(crate) struct PathInput<'a> {
    pub(crate) path: &'a str,
}

/// A poisoned recorder still holds every call made before the panic, so
/// recording carries on with it.
fn lock(recorder: &Arc<Mutex<CassetteRecorder>>) -> MutexGuard<'_, CassetteRecorder> {
    recorder.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records a call whose output is a plain value.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize + ?Sized,
    O: Serialize,
{
    lock(recorder).record(port, method, encode(input), encode(output));
}

/// Records a call whose output is a `Result`.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize + ?Sized,
{
    lock(recorder).record_outcome(port, method, input, result);
}
