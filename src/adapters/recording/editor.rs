//! Recording adapter for the `Editor` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{record_result, PathInput};
use crate::cassette::recorder::CassetteRecorder;
use crate::error::PortResult;
use crate::ports::editor::{Editor, ShowOptions};

/// Records editor actions while delegating to an inner implementation.
pub struct RecordingEditor {
    inner: Box<dyn Editor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEditor {
    /// Creates a new recording editor wrapping the given implementation.
    pub fn new(inner: Box<dyn Editor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct ShowInput<'a> {
    path: &'a str,
    #[serde(flatten)]
    options: ShowOptions,
}

#[derive(Serialize)]
struct TextInput<'a> {
    text: &'a str,
}

impl Editor for RecordingEditor {
    fn reveal_in_explorer(&self, path: &Path) -> PortResult<()> {
        let result = self.inner.reveal_in_explorer(path);
        let input = PathInput { path: &path.display().to_string() };
        record_result(&self.recorder, "editor", "reveal_in_explorer", &input, &result);
        result
    }

    fn show_text_document(&self, path: &Path, options: ShowOptions) -> PortResult<()> {
        let result = self.inner.show_text_document(path, options);
        let input = ShowInput { path: &path.display().to_string(), options };
        record_result(&self.recorder, "editor", "show_text_document", &input, &result);
        result
    }

    fn write_clipboard(&self, text: &str) -> PortResult<()> {
        let result = self.inner.write_clipboard(text);
        record_result(&self.recorder, "editor", "write_clipboard", &TextInput { text }, &result);
        result
    }

    fn show_warning(&self, message: &str) -> PortResult<()> {
        let result = self.inner.show_warning(message);
        let input = TextInput { text: message };
        record_result(&self.recorder, "editor", "show_warning", &input, &result);
        result
    }
}
