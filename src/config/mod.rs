pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings threaded explicitly into the scanner and temp-directory helpers.
///
/// The host builds one value at startup and hands it to whatever needs it;
/// nothing in this crate reads configuration from globals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolsConfig {
    /// Prefix for scratch directories, `<prefix>-<random>`.
    pub temp_prefix: String,
    /// Base directory for scratch directories; `None` means the system temp area.
    pub temp_base_dir: Option<PathBuf>,
    /// File-name patterns skipped while scanning.
    pub exclude_patterns: Vec<String>,
    /// Report symlinks to directories as directories. Links are never descended into.
    pub classify_dir_symlinks: bool,
    /// Maximum scan depth below the root; `None` scans the whole tree.
    pub max_depth: Option<usize>,
}

impl ToolsConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }

    /// The directory scratch directories are created in.
    pub fn temp_base(&self) -> PathBuf {
        self.temp_base_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Creates a scratch directory using this configuration.
    pub fn create_temp(&self) -> crate::core::Result<PathBuf> {
        crate::core::temp::create_temp_in(&self.temp_base(), &self.temp_prefix)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        settings::save_config(self, Some(path))
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let exclude_patterns = [
            ".git",
            ".svn",
            ".hg",
            "node_modules",
            "target",
            "*.swp",
            "*~",
            ".DS_Store",
            "Thumbs.db",
        ]
        .iter()
        .map(|p| p.to_string())
        .collect();

        Self {
            temp_prefix: "search-and-replace".to_string(),
            temp_base_dir: None,
            exclude_patterns,
            classify_dir_symlinks: true,
            max_depth: None,
        }
    }
}
