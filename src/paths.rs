//! Resolution of webview-supplied paths against the workspace.
//!
//! Paths sent by the visualization app start with the workspace folder's
//! own name (`proj/src/a.ts`), so they are resolved against the folder's
//! parent rather than the folder itself.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::ResolveError;

/// Resolves `relative` against the parent directory of `root`.
///
/// Leading separators are stripped before joining and the result is
/// normalized lexically, so `proj/./src/../a.ts` under `/work/proj`
/// resolves to `/work/proj/a.ts`.
///
/// # Errors
///
/// Returns [`ResolveError::NoParent`] if `root` has no parent directory and
/// [`ResolveError::Escapes`] if the normalized result lies outside it.
pub fn resolve_against_parent(root: &Path, relative: &str) -> Result<PathBuf, ResolveError> {
    let base = root
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .ok_or_else(|| ResolveError::NoParent(root.to_path_buf()))?
        .clean();

    let resolved = base.join(relative.trim_start_matches('/')).clean();
    if !resolved.starts_with(&base) {
        return Err(ResolveError::Escapes { base, relative: relative.to_string() });
    }
    Ok(resolved)
}

/// Makes `path` absolute against the current directory and normalizes it.
///
/// Symlinks are left alone, so `.` becomes the current directory's own name
/// rather than its target.
///
/// # Errors
///
/// Returns an error if `path` is relative and the current directory cannot
/// be determined.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    Ok(std::path::absolute(path)?.clean())
}
