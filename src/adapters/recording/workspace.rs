//! Recording adapter for the `Workspace` port.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::Workspace;

/// Records workspace folder lookups while delegating to an inner implementation.
pub struct RecordingWorkspace {
    inner: Box<dyn Workspace>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingWorkspace {
    /// Creates a new recording workspace wrapping the given implementation.
    pub fn new(inner: Box<dyn Workspace>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Workspace for RecordingWorkspace {
    fn folders(&self) -> Vec<PathBuf> {
        let result = self.inner.folders();
        record_interaction(&self.recorder, "workspace", "folders", &json!({}), &result);
        result
    }
}
