//! Fixed-width big-endian encoding of 32-bit size fields.

use super::error::{FilesError, Result};

/// Number of bytes a size field occupies.
pub const SIZE_FIELD_LEN: usize = 4;

/// Encodes `size` as 4 bytes, most significant byte first.
///
/// `0x1f1` becomes `[0x00, 0x00, 0x01, 0xf1]`.
pub fn encode_size(size: u32) -> [u8; SIZE_FIELD_LEN] {
    size.to_be_bytes()
}

/// Decodes a size field produced by [`encode_size`].
pub fn decode_size(bytes: &[u8]) -> Result<u32> {
    let field: [u8; SIZE_FIELD_LEN] = bytes
        .try_into()
        .map_err(|_| FilesError::InvalidSizeBytes(bytes.len()))?;
    Ok(u32::from_be_bytes(field))
}
