//! Live editor adapter forwarding actions to the editor shim.

use std::path::Path;

use crate::error::PortResult;
use crate::ports::editor::{Editor, ShowOptions};
use crate::protocol::HostRequest;

use super::stdio::LineSink;

/// Editor actions delivered as host requests over a [`LineSink`].
pub struct LiveEditor {
    sink: LineSink,
}

impl LiveEditor {
    /// Creates an editor adapter writing to `sink`.
    #[must_use]
    pub fn new(sink: LineSink) -> Self {
        Self { sink }
    }
}

impl Editor for LiveEditor {
    fn reveal_in_explorer(&self, path: &Path) -> PortResult<()> {
        self.sink.send(&HostRequest::RevealInExplorer { path: path.to_path_buf() })
    }

    fn show_text_document(&self, path: &Path, options: ShowOptions) -> PortResult<()> {
        self.sink.send(&HostRequest::ShowTextDocument { path: path.to_path_buf(), options })
    }

    fn write_clipboard(&self, text: &str) -> PortResult<()> {
        self.sink.send(&HostRequest::WriteClipboard { text: text.to_string() })
    }

    fn show_warning(&self, message: &str) -> PortResult<()> {
        self.sink.send(&HostRequest::ShowWarning { message: message.to_string() })
    }
}
