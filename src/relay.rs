//! The message loop between the webview and the host.
//!
//! Frames are handled one at a time in arrival order. A bad frame, including
//! one that is not UTF-8, or a failed command is logged and the loop moves
//! on; only end of input (the panel going away) or a read error stops it.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, warn};

use crate::error::{ProtocolError, RelayError};
use crate::session::{Dispatch, Session};

/// Counters for one relay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStats {
    /// Recognized commands carried out.
    pub handled: usize,
    /// Unrecognized commands skipped.
    pub ignored: usize,
    /// Frames that were malformed or whose command failed.
    pub failed: usize,
}

/// Relays newline-delimited frames from `reader` until end of input.
///
/// # Errors
///
/// Returns an error only if reading from `reader` fails.
pub async fn run<R>(session: &Session, mut reader: R) -> std::io::Result<RelayStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut stats = RelayStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let outcome = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let frame = line.trim();
                if frame.is_empty() {
                    continue;
                }
                session.handle_line(frame).await
            }
            Err(e) => Err(ProtocolError::Malformed(e.to_string()).into()),
        };
        match outcome {
            Ok(Dispatch::Handled) => stats.handled += 1,
            Ok(Dispatch::Ignored) => stats.ignored += 1,
            Err(RelayError::Protocol(e)) => {
                stats.failed += 1;
                warn!(session = %session.id(), error = %e, "dropping frame");
            }
            Err(e) => {
                stats.failed += 1;
                error!(session = %session.id(), error = %e, "command failed");
            }
        }
    }

    info!(
        session = %session.id(),
        handled = stats.handled,
        ignored = stats.ignored,
        failed = stats.failed,
        "panel closed"
    );
    Ok(stats)
}
