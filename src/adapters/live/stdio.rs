//! Line-delimited JSON channel to the editor shim.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::error::PortResult;
use crate::protocol::HostRequest;

/// Shared writer that emits one [`HostRequest`] per line.
///
/// Cloning yields another handle to the same writer, so the editor and
/// panel adapters interleave whole lines on a single stream.
#[derive(Clone)]
pub struct LineSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl LineSink {
    /// Wraps an arbitrary writer.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self { writer: Arc::new(Mutex::new(Box::new(writer))) }
    }

    /// A sink writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Serializes `request` as a single line and flushes it.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn send(&self, request: &HostRequest) -> PortResult<()> {
        let mut line = serde_json::to_vec(request)?;
        line.push(b'\n');
        let mut writer = self.writer.lock().map_err(|e| format!("host channel poisoned: {e}"))?;
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}
