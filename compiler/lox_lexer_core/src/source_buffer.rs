//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor can look one or two bytes ahead without explicit bounds
//! checks. The total size is rounded up to the next 64-byte boundary, which
//! also provides safe padding for `peek()` and `peek2()` near the end.
//!
//! Input is arbitrary bytes, not `&str`: invalid UTF-8 and interior NUL
//! bytes are legal here and are classified later by [`Cursor::decode`].
//!
//! # Byte-Order Mark
//!
//! A leading UTF-8 BOM (`EF BB BF`) is recorded at construction. The cursor
//! starts after it, so it never appears in a lexeme, but offsets still count
//! it and stay valid for slicing the caller's buffer.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// The UTF-8 encoding of U+FEFF.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [bom?, source_bytes..., 0x00, padding_zeros...]
///        ^                ^     ^
///        start            |     rounded up to 64-byte boundary
///                    source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Offset of the first scannable byte: 3 after a BOM, else 0.
    start: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from raw source bytes.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`. Input longer than `u32::MAX` bytes is truncated to
    /// its first `u32::MAX` bytes, so callers that may see such input must
    /// check the length first (the `lox` driver refuses it with an error).
    pub fn new(source: &[u8]) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let source = &source[..source_len as usize];

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source.len()].copy_from_slice(source);

        let start = if source.starts_with(&UTF8_BOM) { 3 } else { 0 };

        Self {
            buf,
            source_len,
            start,
        }
    }

    /// Returns the source bytes, BOM included (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at the first byte after any BOM.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.start, self.source_len)
    }

    /// Length of the source content in bytes, BOM included.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if there is nothing to scan (empty, or only a BOM).
    pub fn is_empty(&self) -> bool {
        self.start == self.source_len
    }

    /// Whether the source begins with a UTF-8 byte-order mark.
    pub fn has_bom(&self) -> bool {
        self.start > 0
    }
}
