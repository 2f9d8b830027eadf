use anyhow::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::magic::sniff_bytes;

/// Files above this size are assumed binary without reading their content.
pub const MAX_CONTENT_CHECK_BYTES: u64 = 20 * 1024 * 1024;

const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "markdown", "rst", "adoc", "rs", "py", "js", "ts", "jsx", "tsx", "java", "c",
    "cpp", "cc", "h", "hpp", "go", "rb", "php", "swift", "kt", "scala", "hs", "ml", "html", "htm",
    "xml", "css", "scss", "svg", "vue", "json", "yaml", "yml", "toml", "ini", "cfg", "conf",
    "properties", "sql", "sh", "bash", "zsh", "fish", "ps1", "bat", "cmd", "tex", "lua", "vim",
    "dart", "ex", "exs", "erl", "nim", "zig", "log", "diff", "patch", "gitignore", "env", "csv",
    "tsv", "lock", "mod", "sum", "proto", "graphql", "cmake", "glade", "desktop", "service",
];

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "ico", "webp", "tiff", "tif", "heic", "avif",
];

const BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "dylib", "deb", "rpm", "msi", "zip", "tar", "gz", "xz", "bz2", "7z",
    "rar", "jar", "mp3", "mp4", "avi", "mkv", "mov", "webm", "pdf", "doc", "docx", "xls", "xlsx",
    "bin", "db", "sqlite", "rlib", "a", "o", "obj", "class", "pyc",
];

/// Determines if a file is likely to be a text file.
///
/// The extension decides when it is known. Otherwise small files have their
/// first KiB inspected.
pub fn is_text_file(path: &Path) -> Result<bool> {
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        let ext_lower = extension.to_lowercase();

        if TEXT_EXTENSIONS.contains(&ext_lower.as_str()) {
            return Ok(true);
        }
        if BINARY_EXTENSIONS.contains(&ext_lower.as_str())
            || IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        {
            return Ok(false);
        }
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_CONTENT_CHECK_BYTES {
        return Ok(false);
    }

    check_file_content(path)
}

/// Checks file content to determine if it's text or binary.
fn check_file_content(path: &Path) -> Result<bool> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(1024);
    BufReader::new(file).take(1024).read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        return Ok(true);
    }

    if let Some(label) = sniff_bytes(&buffer) {
        tracing::debug!("{} carries a {} signature", path.display(), label);
        return Ok(false);
    }

    if buffer.contains(&0) {
        return Ok(false);
    }

    Ok(std::str::from_utf8(&buffer).is_ok())
}
