//! Collects port calls and writes them out as one cassette file.

use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use super::format::{Cassette, Interaction};

/// Accumulates the calls made on one port during a session.
///
/// Sequence numbers follow call order. Values that fail to serialize are
/// recorded as an `unserializable` marker so a recording never aborts the
/// session it observes.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    session: String,
    started_at: DateTime<Utc>,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Starts a recording that [`finish`](Self::finish) writes to `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        session: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            session: session.into(),
            started_at: Utc::now(),
            interactions: Vec::new(),
        }
    }

    /// Appends a call with already-encoded input and output. Returns its
    /// sequence number.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: Value,
        output: Value,
    ) -> u64 {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
        seq
    }

    /// Appends a call whose outcome is a `Result`, stored as `{"ok": ..}`
    /// or `{"err": "message"}`.
    pub fn record_outcome<I, T, E>(
        &mut self,
        port: &str,
        method: &str,
        input: &I,
        result: &Result<T, E>,
    ) -> u64
    where
        I: Serialize + ?Sized,
        T: Serialize,
        E: Display,
    {
        let output = match result {
            Ok(value) => json!({ "ok": encode(value) }),
            Err(e) => json!({ "err": e.to_string() }),
        };
        self.record(port, method, encode(input), output)
    }

    /// Number of calls recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Writes the cassette and returns its path.
    ///
    /// The YAML goes to a sibling temporary file first and is renamed into
    /// place, so an interrupted write never leaves a truncated cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: self.started_at,
            session: self.session,
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut partial = self.path.clone().into_os_string();
        partial.push(".partial");
        std::fs::write(&partial, yaml)?;
        std::fs::rename(&partial, &self.path)?;
        Ok(self.path)
    }
}

/// Encodes `value` as JSON, or as a marker naming why it could not be.
pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| json!({ "unserializable": e.to_string() }))
}
