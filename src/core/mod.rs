pub mod dir_probe;
pub mod encoding;
pub mod error;
pub mod ignore;
pub mod naming;
pub mod path_segments;
pub mod scanner;
pub mod temp;

use std::path::PathBuf;

/// One entry produced by [`DirectoryScanner::scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    pub path: PathBuf,
    /// True for directories and, when enabled, symlinks to directories.
    pub is_directory: bool,
    pub is_symlink: bool,
    /// Depth below the scan root; direct children are at depth 1.
    pub depth: usize,
}

pub use dir_probe::{current_dir, is_dir_empty, is_dir_or_symlink_dir};
pub use encoding::{decode_size, encode_size};
pub use error::{FilesError, Result};
pub use ignore::{compile_patterns, file_matches, filter_matching};
pub use naming::{base_no_ext, ensure_ext};
pub use path_segments::{split_path, trim_before};
pub use scanner::{empty_dirs, DirectoryScanner};
pub use temp::{create_temp, create_temp_in, remove_temp};
