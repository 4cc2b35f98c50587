//! Replaying adapter for the `Panel` port.

use std::sync::Mutex;

use super::{input_of, replay_unit};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortResult;
use crate::ports::panel::{Panel, PanelSpec};
use crate::protocol::HostMessage;

/// Replays recorded panel delivery outcomes from a cassette.
pub struct ReplayingPanel {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingPanel {
    /// Creates a new replaying panel from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Panel for ReplayingPanel {
    // The panel spec embeds the configured app URL, so it is not compared.
    fn open(&self, _spec: &PanelSpec) -> PortResult<()> {
        replay_unit(&self.replayer, "panel", "open", None)
    }

    fn post_message(&self, message: &HostMessage) -> PortResult<()> {
        replay_unit(&self.replayer, "panel", "post_message", Some(&input_of(message)?))
    }
}
