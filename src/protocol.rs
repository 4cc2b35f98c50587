//! Message protocol between the host, the webview, and the editor shim.
//!
//! Inbound frames come from the visualization app and are decoded into the
//! closed [`AppMessage`] set. Anything outside that set is reported as
//! [`Inbound::Unrecognized`] and never reaches a host action.
//!
//! ```text
//! app  -> host   {"command": "navigate", "data": "proj/src/a.ts", "isFromApp": true}
//! host -> app    {"command": "load-dir-result", "data": {"kind": "directory", ...}}
//! host -> shim   {"request": "reveal-in-explorer", "path": "/proj/src/a.ts"}
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::ports::{PanelSpec, ShowOptions};
use crate::tree::Node;

/// Commands the visualization app may send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "kebab-case")]
pub enum AppMessage {
    /// Snapshot the workspace folder and post it back.
    LoadDir,
    /// Reveal a path in the host's file browser.
    Navigate(String),
    /// Open a path as a text document beside the panel.
    Open(String),
    /// Copy a path's absolute form to the clipboard.
    CopyFullPath(String),
}

impl AppMessage {
    /// Wire name of the command.
    #[must_use]
    pub fn command(&self) -> &'static str {
        match self {
            Self::LoadDir => "load-dir",
            Self::Navigate(_) => "navigate",
            Self::Open(_) => "open",
            Self::CopyFullPath(_) => "copy-full-path",
        }
    }
}

/// Messages the host posts into the webview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "kebab-case")]
pub enum HostMessage {
    /// Reply to [`AppMessage::LoadDir`].
    LoadDirResult(Node),
}

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// One of the recognized commands.
    Command(AppMessage),
    /// A well-formed frame whose command is not recognized.
    Unrecognized(String),
}

#[derive(Deserialize)]
struct Envelope {
    command: Option<Value>,
    #[serde(default)]
    data: Value,
}

impl Inbound {
    /// Decodes one JSON frame from the webview.
    ///
    /// Fields other than `command` and `data` (such as the `isFromApp`
    /// direction flag) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError`] if the frame is not a JSON object, has no
    /// string `command`, or carries a payload of the wrong shape for a
    /// recognized command.
    pub fn parse(frame: &str) -> Result<Self, ProtocolError> {
        let envelope: Envelope =
            serde_json::from_str(frame).map_err(|e| ProtocolError::Malformed(e.to_string()))?;
        let Some(Value::String(command)) = envelope.command else {
            return Err(ProtocolError::MissingCommand);
        };

        let message = match command.as_str() {
            "load-dir" => AppMessage::LoadDir,
            "navigate" => AppMessage::Navigate(path_payload(&command, envelope.data)?),
            "open" => AppMessage::Open(path_payload(&command, envelope.data)?),
            "copy-full-path" => AppMessage::CopyFullPath(path_payload(&command, envelope.data)?),
            _ => return Ok(Self::Unrecognized(command)),
        };
        Ok(Self::Command(message))
    }
}

fn path_payload(command: &str, data: Value) -> Result<String, ProtocolError> {
    match data {
        Value::String(path) => Ok(path),
        _ => Err(ProtocolError::InvalidPayload {
            command: command.to_string(),
            expected: "a relative path string",
        }),
    }
}

/// Requests printed for the editor shim, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "kebab-case")]
pub enum HostRequest {
    /// Create and show the webview panel.
    CreatePanel(PanelSpec),
    /// Post a message into the webview.
    PostMessage {
        /// Message forwarded to the app.
        message: HostMessage,
    },
    /// Reveal a path in the file browser.
    RevealInExplorer {
        /// Absolute path.
        path: PathBuf,
    },
    /// Open a path as a text document.
    ShowTextDocument {
        /// Absolute path.
        path: PathBuf,
        /// How to show it.
        #[serde(flatten)]
        options: ShowOptions,
    },
    /// Write text to the clipboard.
    WriteClipboard {
        /// Text to copy.
        text: String,
    },
    /// Show a warning notification.
    ShowWarning {
        /// Warning text.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ViewColumn;
    use serde_json::json;

    #[test]
    fn parses_recognized_commands() {
        assert_eq!(
            Inbound::parse(r#"{"command":"load-dir","isFromApp":true}"#).unwrap(),
            Inbound::Command(AppMessage::LoadDir)
        );
        assert_eq!(
            Inbound::parse(r#"{"command":"load-dir","data":{"ignored":1}}"#).unwrap(),
            Inbound::Command(AppMessage::LoadDir)
        );
        assert_eq!(
            Inbound::parse(r#"{"command":"navigate","data":"proj/src"}"#).unwrap(),
            Inbound::Command(AppMessage::Navigate("proj/src".into()))
        );
        assert_eq!(
            Inbound::parse(r#"{"command":"open","data":"proj/a.ts"}"#).unwrap(),
            Inbound::Command(AppMessage::Open("proj/a.ts".into()))
        );
        assert_eq!(
            Inbound::parse(r#"{"command":"copy-full-path","data":"proj"}"#).unwrap(),
            Inbound::Command(AppMessage::CopyFullPath("proj".into()))
        );
    }

    #[test]
    fn unknown_commands_are_unrecognized_not_errors() {
        assert_eq!(
            Inbound::parse(r#"{"command":"delete-everything","data":[1,2,3]}"#).unwrap(),
            Inbound::Unrecognized("delete-everything".into())
        );
    }

    #[test]
    fn rejects_malformed_frames() {
        assert!(matches!(Inbound::parse("not json"), Err(ProtocolError::Malformed(_))));
        assert!(matches!(Inbound::parse("42"), Err(ProtocolError::Malformed(_))));
        assert!(matches!(Inbound::parse(r#"{"data":"x"}"#), Err(ProtocolError::MissingCommand)));
        assert!(matches!(Inbound::parse(r#"{"command":7}"#), Err(ProtocolError::MissingCommand)));
        assert!(matches!(
            Inbound::parse(r#"{"command":"open","data":{"path":"x"}}"#),
            Err(ProtocolError::InvalidPayload { command, .. }) if command == "open"
        ));
        assert!(matches!(
            Inbound::parse(r#"{"command":"navigate"}"#),
            Err(ProtocolError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn load_dir_result_uses_command_and_data_fields() {
        let message = HostMessage::LoadDirResult(Node::directory("proj", vec![]));
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "command": "load-dir-result",
                "data": {"kind": "directory", "name": "proj", "children": []}
            })
        );
    }

    #[test]
    fn host_requests_are_tagged_by_kind() {
        let request = HostRequest::ShowTextDocument {
            path: PathBuf::from("/proj/a.ts"),
            options: ShowOptions { preview: false, view_column: ViewColumn::Beside },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "request": "show-text-document",
                "path": "/proj/a.ts",
                "preview": false,
                "viewColumn": "beside"
            })
        );

        let request = HostRequest::WriteClipboard { text: "/proj".into() };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"request": "write-clipboard", "text": "/proj"})
        );
    }

    #[test]
    fn command_names_match_wire_tags() {
        for message in [
            AppMessage::LoadDir,
            AppMessage::Navigate("p".into()),
            AppMessage::Open("p".into()),
            AppMessage::CopyFullPath("p".into()),
        ] {
            let value = serde_json::to_value(&message).unwrap();
            assert_eq!(value["command"], json!(message.command()));
        }
    }
}
