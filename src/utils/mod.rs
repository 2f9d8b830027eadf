pub mod file_detection;
pub mod magic;

#[cfg(test)]
pub mod test_helpers;

pub use file_detection::is_text_file;
pub use magic::{detect_mime, UNKNOWN_MIME};
