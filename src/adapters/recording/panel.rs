//! Recording adapter for the `Panel` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::PortResult;
use crate::ports::panel::{Panel, PanelSpec};
use crate::protocol::HostMessage;

/// Records panel traffic while delegating to an inner implementation.
pub struct RecordingPanel {
    inner: Box<dyn Panel>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingPanel {
    /// Creates a new recording panel wrapping the given implementation.
    pub fn new(inner: Box<dyn Panel>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Panel for RecordingPanel {
    fn open(&self, spec: &PanelSpec) -> PortResult<()> {
        let result = self.inner.open(spec);
        record_result(&self.recorder, "panel", "open", spec, &result);
        result
    }

    fn post_message(&self, message: &HostMessage) -> PortResult<()> {
        let result = self.inner.post_message(message);
        record_result(&self.recorder, "panel", "post_message", message, &result);
        result
    }
}
