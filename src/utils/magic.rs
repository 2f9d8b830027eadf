//! Magic-number file type sniffing.
//!
//! Only the leading bytes of a file are inspected. Signatures are tested
//! longest first, so when two signatures could both match a prefix the more
//! specific one wins and the result does not depend on table iteration order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Label returned when no signature matches or the file cannot be read.
pub const UNKNOWN_MIME: &str = "Unknown";

/// A binary-format signature found at offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicSignature {
    pub bytes: &'static [u8],
    pub label: &'static str,
}

/// Known signatures, ordered longest first.
pub static MAGIC_TABLE: &[MagicSignature] = &[
    MagicSignature {
        bytes: b"\x37\x7A\xBC\xAF\x27\x1C\x00\x04",
        label: "7zip",
    },
    MagicSignature {
        bytes: b"\x1F\x8B\x08\x00\x00\x09\x6E\x88",
        label: "gzip",
    },
    MagicSignature {
        bytes: b"\xFD\x37\x7A\x58\x5A\x00\x00",
        label: "xz",
    },
    MagicSignature {
        bytes: b"\x75\x73\x74\x61\x72",
        label: "tar",
    },
];

/// Length of the longest signature in [`MAGIC_TABLE`].
pub fn max_signature_len() -> usize {
    MAGIC_TABLE
        .iter()
        .map(|sig| sig.bytes.len())
        .max()
        .unwrap_or(0)
}

/// Matches already-read leading bytes against the table.
pub fn sniff_bytes(head: &[u8]) -> Option<&'static str> {
    MAGIC_TABLE
        .iter()
        .find(|sig| head.starts_with(sig.bytes))
        .map(|sig| sig.label)
}

/// Reads up to the longest signature length from `reader` and sniffs it.
///
/// Short reads are retried until the buffer is full or the stream ends.
pub fn detect_mime_from_reader<R: Read>(reader: R) -> std::io::Result<&'static str> {
    let mut head = Vec::with_capacity(max_signature_len());
    reader
        .take(max_signature_len() as u64)
        .read_to_end(&mut head)?;
    Ok(sniff_bytes(&head).unwrap_or(UNKNOWN_MIME))
}

/// Detects the format of the file at `path` from its magic number.
///
/// Returns [`UNKNOWN_MIME`] when the file cannot be opened or read, is
/// shorter than every signature, or matches none.
pub fn detect_mime(path: &Path) -> &'static str {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!("Cannot open {} for sniffing: {}", path.display(), e);
            return UNKNOWN_MIME;
        }
    };

    match detect_mime_from_reader(BufReader::new(file)) {
        Ok(label) => {
            tracing::debug!("Sniffed {} as {}", path.display(), label);
            label
        }
        Err(e) => {
            tracing::debug!("Cannot read {} for sniffing: {}", path.display(), e);
            UNKNOWN_MIME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const GZIP_HEADER: &[u8] = b"\x1F\x8B\x08\x00\x00\x09\x6E\x88";

    #[test]
    fn test_table_is_ordered_longest_first() {
        let lengths: Vec<usize> = MAGIC_TABLE.iter().map(|sig| sig.bytes.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
        assert_eq!(max_signature_len(), 8);
    }

    #[test]
    fn test_detect_gzip_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.gz");
        let mut content = GZIP_HEADER.to_vec();
        content.extend_from_slice(b"rest of the stream");
        fs::write(&path, content).unwrap();

        assert_eq!(detect_mime(&path), "gzip");
    }

    #[test]
    fn test_detect_each_signature() {
        let temp = tempdir().unwrap();
        for sig in MAGIC_TABLE {
            let path = temp.path().join(sig.label);
            fs::write(&path, sig.bytes).unwrap();
            assert_eq!(detect_mime(&path), sig.label);
        }
    }

    #[test]
    fn test_short_file_still_matches_short_signature() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("short.tar");
        fs::write(&path, b"ustar").unwrap();
        assert_eq!(detect_mime(&path), "tar");
    }

    #[test]
    fn test_unknown_for_empty_missing_and_text_files() {
        let temp = tempdir().unwrap();
        let empty = temp.path().join("empty");
        fs::write(&empty, b"").unwrap();
        let text = temp.path().join("notes.txt");
        fs::write(&text, "plain text content").unwrap();

        assert_eq!(detect_mime(&empty), UNKNOWN_MIME);
        assert_eq!(detect_mime(&text), UNKNOWN_MIME);
        assert_eq!(detect_mime(&temp.path().join("missing")), UNKNOWN_MIME);
    }

    #[test]
    fn test_directory_is_unknown() {
        let temp = tempdir().unwrap();
        assert_eq!(detect_mime(temp.path()), UNKNOWN_MIME);
    }

    #[test]
    fn test_truncated_signature_is_unknown() {
        assert_eq!(sniff_bytes(&GZIP_HEADER[..4]), None);
        assert_eq!(sniff_bytes(GZIP_HEADER), Some("gzip"));
    }

    #[test]
    fn test_detect_from_reader() {
        let reader = std::io::Cursor::new(b"\xFD\x37\x7A\x58\x5A\x00\x00\x04".to_vec());
        assert_eq!(detect_mime_from_reader(reader).unwrap(), "xz");
    }
}
