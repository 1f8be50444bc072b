//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached or exceeded the source length. No explicit bounds checking
//! is performed in the common case; the sentinel guarantees termination.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from EOF by comparing `pos` against `source_len`.
//! A null at `pos < source_len` is an interior null;
//! a null at `pos >= source_len` is the sentinel (EOF).
//!
//! # Decoding
//!
//! The source is not assumed to be valid UTF-8. [`Cursor::decode`] reads
//! exactly one code point at the current position and classifies it without
//! moving, so the caller decides how far to advance.

/// Classification of the code point under the cursor.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Decoded {
    /// A well-formed, non-NUL code point occupying `len` bytes.
    Char { ch: char, len: u32 },
    /// A `0x00` byte inside the source (not the sentinel).
    InteriorNull,
    /// A malformed sequence. `len` is the number of bytes to skip (at least 1).
    InvalidUtf8 { len: u32 },
    /// The cursor is at the end of the source.
    Eof,
}

impl Decoded {
    /// Number of bytes covered by this code point (0 for EOF).
    #[inline]
    pub fn width(self) -> u32 {
        match self {
            Decoded::Char { len, .. } | Decoded::InvalidUtf8 { len } => len,
            Decoded::InteriorNull => 1,
            Decoded::Eof => 0,
        }
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        matches!(self, Decoded::Eof)
    }
}

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so saving a position is a plain assignment.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00` (cache-line padding). This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at `start` over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], start: u32, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        debug_assert!(start <= source_len, "start {start} past end {source_len}");
        Self {
            buf,
            pos: start,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at EOF (the sentinel byte). Interior null bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    ///
    /// Safe to call at any position: cache-line alignment provides at least
    /// one full cache line of zero padding after the sentinel.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Raw source bytes in `start..end`.
    ///
    /// Unlike a `&str` slice this never fails on a non-UTF-8 boundary; the
    /// caller decides how to render the bytes.
    pub fn bytes(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Raw source bytes from `start` to the current position.
    pub fn bytes_from(&self, start: u32) -> &'a [u8] {
        self.bytes(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Uses the leading byte to determine character width:
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Classify the code point at the current position without advancing.
    ///
    /// ASCII takes a single-byte fast path. Multi-byte sequences are checked
    /// with the standard validator, so a malformed sequence covers exactly
    /// the maximal invalid prefix it reports. A sequence cut short by the
    /// end of input covers the remaining bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "error lengths are at most 4 bytes"
    )]
    pub fn decode(&self) -> Decoded {
        let lead = self.current();
        if lead == 0 {
            return if self.pos >= self.source_len {
                Decoded::Eof
            } else {
                Decoded::InteriorNull
            };
        }
        if lead.is_ascii() {
            return Decoded::Char {
                ch: char::from(lead),
                len: 1,
            };
        }

        let width = Self::utf8_char_width(lead).min(self.source_len - self.pos);
        let seq = self.bytes(self.pos, self.pos + width);
        match std::str::from_utf8(seq) {
            Ok(s) => match s.chars().next() {
                Some(ch) => Decoded::Char { ch, len: width },
                None => Decoded::InvalidUtf8 { len: 1 },
            },
            Err(err) => {
                let len = err.error_len().map_or(width, |n| n as u32);
                Decoded::InvalidUtf8 { len: len.max(1) }
            }
        }
    }

    /// Skip to the next `\n` byte or EOF, but only if the skipped bytes are
    /// valid UTF-8 with no NUL. Returns `false` and leaves the cursor in
    /// place otherwise, so the caller can decode the line step by step.
    ///
    /// Used for comment bodies.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_clean_line(&mut self) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let line = match memchr::memchr(b'\n', remaining) {
            Some(offset) => &remaining[..offset],
            None => remaining,
        };
        if memchr::memchr(0, line).is_some() || std::str::from_utf8(line).is_err() {
            return false;
        }
        self.pos += line.len() as u32;
        true
    }
}

#[cfg(test)]
mod tests;
