//! Serves recorded interactions back, one port method at a time.

use std::collections::HashMap;

use serde_json::Value;

use super::format::{Cassette, Interaction};
use crate::error::ReplayError;

/// Recorded calls for one `port::method` pair and how many were served.
#[derive(Debug, Default)]
struct Track {
    interactions: Vec<Interaction>,
    served: usize,
}

/// Answers port calls from a cassette.
///
/// Each `port::method` pair has its own track, so calls on different ports
/// may interleave differently than they did while recording. Within a pair
/// the recorded order is kept.
#[derive(Debug)]
pub struct CassetteReplayer {
    tracks: HashMap<(String, String), Track>,
}

impl CassetteReplayer {
    /// Indexes a loaded cassette by port and method.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut tracks: HashMap<(String, String), Track> = HashMap::new();
        for interaction in &cassette.interactions {
            tracks
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .interactions
                .push(interaction.clone());
        }
        Self { tracks }
    }

    /// Serves the next recorded call for `port::method`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Unrecorded`] if the pair never appears in the
    /// cassette and [`ReplayError::Exhausted`] once every call was served.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<&Interaction, ReplayError> {
        let available = self.available();
        let Some(track) = self.tracks.get_mut(&(port.to_string(), method.to_string())) else {
            return Err(ReplayError::Unrecorded {
                port: port.to_string(),
                method: method.to_string(),
                available,
            });
        };
        let Some(interaction) = track.interactions.get(track.served) else {
            return Err(ReplayError::Exhausted {
                port: port.to_string(),
                method: method.to_string(),
                count: track.interactions.len(),
            });
        };
        track.served += 1;
        Ok(interaction)
    }

    /// Serves the next recorded call for `port::method`, checking that it
    /// was recorded with `input`.
    ///
    /// # Errors
    ///
    /// Same as [`next_interaction`](Self::next_interaction), plus
    /// [`ReplayError::Drift`] when the recorded input differs.
    pub fn next_matching(
        &mut self,
        port: &str,
        method: &str,
        input: &Value,
    ) -> Result<&Interaction, ReplayError> {
        let interaction = self.next_interaction(port, method)?;
        if interaction.input != *input {
            return Err(ReplayError::Drift {
                port: port.to_string(),
                method: method.to_string(),
                seq: interaction.seq,
                recorded: interaction.input.clone(),
                requested: input.clone(),
            });
        }
        Ok(interaction)
    }

    /// Number of recorded calls not yet served, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tracks.values().map(|t| t.interactions.len() - t.served).sum()
    }

    fn available(&self) -> String {
        let mut pairs: Vec<String> =
            self.tracks.keys().map(|(port, method)| format!("{port}::{method}")).collect();
        pairs.sort();
        pairs.join(", ")
    }
}
