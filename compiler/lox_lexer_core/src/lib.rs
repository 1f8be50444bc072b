//! Low-level byte layer for the Lox lexer.
//!
//! - [`SourceBuffer`] copies the input into a sentinel-terminated buffer and
//!   detects a leading UTF-8 byte-order mark.
//! - [`Cursor`] walks that buffer byte by byte and decodes one code point at
//!   a time into a [`Decoded`] value.
//!
//! Nothing here classifies tokens or reports errors; abnormal input is
//! surfaced as [`Decoded`] variants for the scanner to act on.

mod cursor;
mod source_buffer;

pub use cursor::{Cursor, Decoded};
pub use source_buffer::{SourceBuffer, UTF8_BOM};
