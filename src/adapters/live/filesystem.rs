//! Live filesystem adapter using `tokio::fs`.

use std::path::Path;

use crate::ports::filesystem::{DirEntry, EntryKind, FileStat, FileSystem, FsFuture};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_directory<'a>(&'a self, path: &'a Path) -> FsFuture<'a, Vec<DirEntry>> {
        Box::pin(async move {
            let mut entries = Vec::new();
            let mut dir = tokio::fs::read_dir(path).await?;
            while let Some(entry) = dir.next_entry().await? {
                // `file_type` does not follow symlinks.
                let file_type = entry.file_type().await?;
                let kind = if file_type.is_symlink() {
                    EntryKind::Symlink
                } else if file_type.is_dir() {
                    EntryKind::Directory
                } else if file_type.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };
                entries.push(DirEntry::new(entry.file_name(), kind));
            }
            Ok(entries)
        })
    }

    fn stat<'a>(&'a self, path: &'a Path) -> FsFuture<'a, FileStat> {
        Box::pin(async move {
            let metadata = tokio::fs::metadata(path).await?;
            Ok(FileStat { size: metadata.len() })
        })
    }
}
