//! Filesystem port for directory listings and stats.

use std::ffi::OsString;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PortResult;

/// Boxed future type alias used by [`FileSystem`] to keep the trait dyn-compatible.
pub type FsFuture<'a, T> = Pin<Box<dyn Future<Output = PortResult<T>> + Send + 'a>>;

/// Kind of a directory entry as reported by the listing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link, not followed by the listing.
    Symlink,
    /// Anything else (sockets, devices, ...).
    Other,
}

/// A `(name, kind)` pair from a directory listing.
///
/// The name is kept as the host returned it so it can be joined back onto
/// the parent path. Cassettes store it lossily as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name within the listed directory.
    #[serde(with = "lossy_name")]
    pub name: OsString,
    /// Entry kind.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Creates a listing entry.
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }

    /// Entry name for display, with invalid UTF-8 replaced.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

mod lossy_name {
    use std::ffi::{OsStr, OsString};

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(name: &OsStr, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&name.to_string_lossy())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OsString, D::Error> {
        String::deserialize(deserializer).map(OsString::from)
    }
}

/// Metadata returned by [`FileSystem::stat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    /// Size in bytes.
    pub size: u64,
}

/// Read-only access to the host file system.
///
/// Both operations are asynchronous: each call suspends the caller until
/// the host resolves it.
pub trait FileSystem: Send + Sync {
    /// Lists the immediate entries of a directory in host order.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn read_directory<'a>(&'a self, path: &'a Path) -> FsFuture<'a, Vec<DirEntry>>;

    /// Returns metadata for a path, following symbolic links.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be read.
    fn stat<'a>(&'a self, path: &'a Path) -> FsFuture<'a, FileStat>;
}
