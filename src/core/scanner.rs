use super::dir_probe::{is_dir_empty, is_dir_or_symlink_dir};
use super::error::{FilesError, Result};
use super::ignore::compile_patterns;
use super::ScannedEntry;
use crate::config::ToolsConfig;
use globset::GlobSet;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Walks a directory tree for a file browser, skipping excluded names.
///
/// Symlinks are never descended into, so link cycles cannot loop the scan.
pub struct DirectoryScanner {
    exclude_set: GlobSet,
    classify_dir_symlinks: bool,
    max_depth: Option<usize>,
}

impl DirectoryScanner {
    pub fn new<S: AsRef<str>>(exclude_patterns: &[S]) -> Self {
        Self {
            exclude_set: compile_patterns(exclude_patterns),
            classify_dir_symlinks: true,
            max_depth: None,
        }
    }

    pub fn from_config(config: &ToolsConfig) -> Self {
        Self {
            exclude_set: compile_patterns(&config.exclude_patterns),
            classify_dir_symlinks: config.classify_dir_symlinks,
            max_depth: config.max_depth,
        }
    }

    /// Lists every non-excluded entry below `root`, sorted by path.
    ///
    /// An unreadable root is an error; unreadable children are logged and
    /// skipped. Excluded directories are not descended into.
    pub fn scan(&self, root: &Path) -> Result<Vec<ScannedEntry>> {
        fs::read_dir(root).map_err(|e| FilesError::Io(e, root.to_path_buf()))?;

        let mut walker = WalkDir::new(root).follow_links(false).min_depth(1);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for entry in walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(FilesError::WalkDir(e)),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    skipped += 1;
                    continue;
                }
            };

            match self.classify(&entry) {
                Some(item) => entries.push(item),
                None => skipped += 1,
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::debug!(
            "Scanned {}: {} entries, {} skipped",
            root.display(),
            entries.len(),
            skipped
        );

        Ok(entries)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        self.exclude_set.is_match(entry.file_name())
    }

    fn classify(&self, entry: &DirEntry) -> Option<ScannedEntry> {
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Unable to stat {}: {}", entry.path().display(), e);
                return None;
            }
        };

        let path = entry.path();
        let is_directory = match path.parent() {
            Some(parent) if self.classify_dir_symlinks => {
                is_dir_or_symlink_dir(parent, entry.file_name(), &metadata)
            }
            _ => metadata.is_dir(),
        };

        Some(ScannedEntry {
            path: path.to_path_buf(),
            is_directory,
            is_symlink: entry.path_is_symlink(),
            depth: entry.depth(),
        })
    }
}

/// Returns the directory entries that currently contain nothing.
///
/// Directories that cannot be read are logged and left out.
pub fn empty_dirs(entries: &[ScannedEntry]) -> Vec<&ScannedEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_directory)
        .filter(|entry| match is_dir_empty(&entry.path) {
            Ok(empty) => empty,
            Err(e) => {
                tracing::warn!("Unable to check {}: {}", entry.path.display(), e);
                false
            }
        })
        .collect()
}
