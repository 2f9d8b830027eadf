//! Filename helpers: extension replacement and base names.

use std::path::MAIN_SEPARATOR;

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Returns the extension of the last path element, dot included.
///
/// The extension starts at the last `.` of the element, so `archive.tar.gz`
/// yields `.gz` and `.bashrc` yields `.bashrc`. Returns `""` when there is none.
pub fn extension_of(filename: &str) -> &str {
    for (idx, c) in filename.char_indices().rev() {
        if c == '.' {
            return &filename[idx..];
        }
        if is_separator(c) {
            break;
        }
    }
    ""
}

/// Makes sure `filename` ends with `ext`, replacing any existing extension.
///
/// `ext` is appended verbatim; include the leading dot if you want one.
pub fn ensure_ext(filename: &str, ext: &str) -> String {
    if filename.ends_with(ext) {
        return filename.to_string();
    }
    let current = extension_of(filename);
    let stem = &filename[..filename.len() - current.len()];
    format!("{stem}{ext}")
}

/// Returns the last element of `filename`, ignoring trailing separators.
///
/// An empty input yields `"."`, a separator-only input yields the separator.
pub fn base_name(filename: &str) -> &str {
    if filename.is_empty() {
        return ".";
    }
    let trimmed = filename.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return &filename[..filename.chars().next().map_or(0, char::len_utf8)];
    }
    match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Returns the base name of `filename` without its last extension.
pub fn base_no_ext(filename: &str) -> String {
    let base = base_name(filename);
    let ext = extension_of(base);
    base[..base.len() - ext.len()].to_string()
}
