//! Port traits defining the host boundary.
//!
//! Each trait stands for one slice of the editor host's plugin API
//! (file system, workspace folders, editor actions, the webview panel).
//! Implementations live in `src/adapters/`.

pub mod editor;
pub mod filesystem;
pub mod panel;
pub mod workspace;

pub use editor::{Editor, ShowOptions, ViewColumn};
pub use filesystem::{DirEntry, EntryKind, FileStat, FileSystem, FsFuture};
pub use panel::{Panel, PanelSpec};
pub use workspace::Workspace;
