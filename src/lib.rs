//! File-system helpers for the Search And Replace application: glob
//! matching, path segments, directory probing, scratch directories,
//! filename normalization and magic-number sniffing.

pub mod assets;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::{FilesError, Result, ScannedEntry};
