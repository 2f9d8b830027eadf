//! Creation and removal of scratch directories.
//!
//! Directories created here are not cleaned up automatically; the caller owns
//! them and calls [`remove_temp`] when done.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use super::error::{FilesError, Result};

/// Creates `<prefix>-<random>` under the system temp area.
///
/// The returned path ends with a separator.
pub fn create_temp(prefix: &str) -> Result<PathBuf> {
    create_temp_in(&std::env::temp_dir(), prefix)
}

/// Creates `<prefix>-<random>` under `base`.
///
/// The returned path ends with a separator.
pub fn create_temp_in(base: &Path, prefix: &str) -> Result<PathBuf> {
    let dir = tempfile::Builder::new()
        .prefix(&format!("{prefix}-"))
        .tempdir_in(base)
        .map_err(|e| FilesError::TempCreate(e, base.to_path_buf()))?
        .keep();

    let mut with_separator: OsString = dir.into_os_string();
    with_separator.push(MAIN_SEPARATOR_STR);
    let dir = PathBuf::from(with_separator);

    tracing::debug!("Created temp directory {:?}", dir);
    Ok(dir)
}

/// Removes `path` and everything below it.
///
/// A path that does not exist is not an error, so calling this twice is fine.
pub fn remove_temp(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FilesError::Io(e, path.to_path_buf())),
    };

    let removal = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match removal {
        Ok(()) => {
            tracing::debug!("Removed temp directory {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FilesError::Io(e, path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dir_probe::is_dir_empty;

    #[test]
    fn test_create_temp_returns_empty_dir_with_trailing_separator() {
        let dir = create_temp("sar").unwrap();

        assert!(dir.to_string_lossy().ends_with(MAIN_SEPARATOR_STR));
        assert!(dir.is_dir());
        assert!(is_dir_empty(&dir).unwrap());
        let name = dir.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("sar-"), "unexpected name {name}");

        remove_temp(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_create_temp_names_are_unique() {
        let first = create_temp("sar").unwrap();
        let second = create_temp("sar").unwrap();
        assert_ne!(first, second);

        remove_temp(&first).unwrap();
        remove_temp(&second).unwrap();
    }

    #[test]
    fn test_create_temp_in_missing_base_fails() {
        let base = tempfile::tempdir().unwrap();
        let missing = base.path().join("does-not-exist");
        let result = create_temp_in(&missing, "sar");
        assert!(matches!(result, Err(FilesError::TempCreate(_, p)) if p == missing));
    }

    #[test]
    fn test_remove_temp_is_recursive_and_idempotent() {
        let dir = create_temp("sar").unwrap();
        fs::create_dir_all(dir.join("a/b")).unwrap();
        fs::write(dir.join("a/b/file.txt"), "content").unwrap();

        remove_temp(&dir).unwrap();
        assert!(!dir.exists());
        remove_temp(&dir).unwrap();
    }

    #[test]
    fn test_remove_temp_on_plain_file() {
        let base = tempfile::tempdir().unwrap();
        let file = base.path().join("stray.txt");
        fs::write(&file, "x").unwrap();

        remove_temp(&file).unwrap();
        assert!(!file.exists());
    }
}
