//! Live adapters backed by the real file system and the stdio host channel.

pub mod editor;
pub mod filesystem;
pub mod panel;
pub mod stdio;
pub mod workspace;

pub use editor::LiveEditor;
pub use filesystem::LiveFileSystem;
pub use panel::LivePanel;
pub use stdio::LineSink;
pub use workspace::LiveWorkspace;
