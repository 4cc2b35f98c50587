//! Live panel adapter forwarding webview traffic to the editor shim.

use tracing::trace;

use crate::error::PortResult;
use crate::ports::panel::{Panel, PanelSpec};
use crate::protocol::{HostMessage, HostRequest};

use super::stdio::LineSink;

/// Webview panel driven through host requests over a [`LineSink`].
pub struct LivePanel {
    sink: LineSink,
}

impl LivePanel {
    /// Creates a panel adapter writing to `sink`.
    #[must_use]
    pub fn new(sink: LineSink) -> Self {
        Self { sink }
    }
}

impl Panel for LivePanel {
    fn open(&self, spec: &PanelSpec) -> PortResult<()> {
        self.sink.send(&HostRequest::CreatePanel(spec.clone()))
    }

    fn post_message(&self, message: &HostMessage) -> PortResult<()> {
        trace!(?message, "host -> app");
        self.sink.send(&HostRequest::PostMessage { message: message.clone() })
    }
}
