//! Replaying adapter for the `Editor` port.

use std::path::Path;
use std::sync::Mutex;

use serde_json::json;

use super::{input_of, path_input, replay_unit};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortResult;
use crate::ports::editor::{Editor, ShowOptions};

/// Replays recorded editor action outcomes from a cassette.
pub struct ReplayingEditor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEditor {
    /// Creates a new replaying editor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Editor for ReplayingEditor {
    fn reveal_in_explorer(&self, path: &Path) -> PortResult<()> {
        replay_unit(&self.replayer, "editor", "reveal_in_explorer", Some(&path_input(path)))
    }

    fn show_text_document(&self, path: &Path, options: ShowOptions) -> PortResult<()> {
        let mut input = input_of(&options)?;
        input["path"] = json!(path.display().to_string());
        replay_unit(&self.replayer, "editor", "show_text_document", Some(&input))
    }

    fn write_clipboard(&self, text: &str) -> PortResult<()> {
        replay_unit(&self.replayer, "editor", "write_clipboard", Some(&json!({ "text": text })))
    }

    fn show_warning(&self, message: &str) -> PortResult<()> {
        replay_unit(&self.replayer, "editor", "show_warning", Some(&json!({ "text": message })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::ports::ViewColumn;
    use chrono::Utc;

    #[test]
    fn replays_recorded_host_failure() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            session: "s".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "editor".into(),
                    method: "write_clipboard".into(),
                    input: json!({"text": "/proj"}),
                    output: json!({"ok": null}),
                },
                Interaction {
                    seq: 1,
                    port: "editor".into(),
                    method: "reveal_in_explorer".into(),
                    input: json!({"path": "/gone"}),
                    output: json!({"err": "no such file"}),
                },
            ],
        };
        let editor = ReplayingEditor::new(CassetteReplayer::new(&cassette));

        assert!(editor.write_clipboard("/proj").is_ok());
        let err = editor.reveal_in_explorer(Path::new("/gone")).unwrap_err();
        assert_eq!(err.to_string(), "no such file");
    }

    #[test]
    fn show_text_document_matches_recorded_options() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            session: "s".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "editor".into(),
                method: "show_text_document".into(),
                input: json!({"path": "/proj/a.ts", "preview": false, "viewColumn": "beside"}),
                output: json!({"ok": null}),
            }],
        };
        let editor = ReplayingEditor::new(CassetteReplayer::new(&cassette));

        let options = ShowOptions { preview: false, view_column: ViewColumn::Beside };
        assert!(editor.show_text_document(Path::new("/proj/a.ts"), options).is_ok());
        let err = editor.show_text_document(Path::new("/proj/a.ts"), options).unwrap_err();
        assert!(err.to_string().contains("exhausted"));
    }
}
