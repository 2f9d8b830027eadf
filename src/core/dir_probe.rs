//! Directory classification helpers: symlinked directories, empty
//! directories and the process working directory.

use std::ffi::OsStr;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use super::error::{FilesError, Result};

/// Reports whether an entry is a directory or a symlink to one.
///
/// `metadata` must come from `symlink_metadata` (lstat), so that a link is
/// seen as a link. For a link, the target is read from `root/name`; relative
/// targets are resolved against `root`. Resolution failures are logged and
/// reported as "not a directory".
pub fn is_dir_or_symlink_dir(root: &Path, name: &OsStr, metadata: &Metadata) -> bool {
    if metadata.is_dir() {
        return true;
    }
    if !metadata.file_type().is_symlink() {
        return false;
    }

    let link = root.join(name);
    match resolve_link_target(root, &link).and_then(|target| {
        fs::metadata(&target).map_err(|e| FilesError::Io(e, target))
    }) {
        Ok(target_metadata) => target_metadata.is_dir(),
        Err(e) => {
            tracing::warn!("Unable to scan: {}", e);
            false
        }
    }
}

fn resolve_link_target(root: &Path, link: &Path) -> Result<PathBuf> {
    let target = fs::read_link(link).map_err(|e| FilesError::Io(e, link.to_path_buf()))?;
    if target.is_absolute() {
        Ok(target)
    } else {
        Ok(root.join(target))
    }
}

/// Reports whether the directory at `path` has no entries.
///
/// At most one entry is read. Failing to open or read the directory is
/// returned as an error.
pub fn is_dir_empty(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path).map_err(|e| FilesError::Io(e, path.to_path_buf()))?;
    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(FilesError::Io(e, path.to_path_buf())),
    }
}

/// Returns the process working directory.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| FilesError::Io(e, PathBuf::from(".")))
}
