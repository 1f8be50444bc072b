use crate::{Cursor, Decoded, SourceBuffer};
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new(b"abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new(b"abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
    cursor.advance_n(2);
    assert!(cursor.is_eof());
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new(b"ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new(b"");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.source_len(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new(b"a\0b");
    let mut cursor = buf.cursor();
    cursor.advance(); // at '\0'
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

// === Byte slices ===

#[test]
fn bytes_extracts_range() {
    let buf = SourceBuffer::new(b"hello world");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.bytes(6, 11), b"world");
    assert_eq!(cursor.bytes(2, 2), b"");
    cursor.advance_n(5);
    assert_eq!(cursor.bytes_from(1), b"ello");
}

#[test]
fn bytes_allows_invalid_utf8() {
    let buf = SourceBuffer::new(b"a\xFFb");
    let cursor = buf.cursor();
    assert_eq!(cursor.bytes(0, 3), b"a\xFFb");
}

// === eat_while ===

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new(b"123");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_stops_at_mismatch() {
    let buf = SourceBuffer::new(b"aab");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'b');
}

// === eat_clean_line ===

#[test]
fn clean_line_stops_at_lf() {
    let buf = SourceBuffer::new(b"// comment\nnext");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.eat_clean_line());
    assert_eq!(cursor.pos(), 10);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn clean_line_stops_at_eof() {
    let buf = SourceBuffer::new("no newline h\u{e9}re".as_bytes());
    let mut cursor = buf.cursor();
    assert!(cursor.eat_clean_line());
    assert_eq!(cursor.pos(), 16);
    assert!(cursor.is_eof());
}

#[test]
fn clean_line_refuses_invalid_utf8() {
    let buf = SourceBuffer::new(b"ok \xFF\n");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_clean_line());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn clean_line_refuses_interior_nul() {
    let buf = SourceBuffer::new(b"a\0b");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_clean_line());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn clean_line_ignores_bytes_after_newline() {
    let buf = SourceBuffer::new(b"fine\n\xFF\0");
    let mut cursor = buf.cursor();
    assert!(cursor.eat_clean_line());
    assert_eq!(cursor.pos(), 4);
}

// === utf8_char_width ===

#[test]
fn char_width_from_lead_byte() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
    assert_eq!(Cursor::utf8_char_width(0xFF), 1);
}

// === decode ===

fn decode_at(source: &[u8], pos: u32) -> Decoded {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    cursor.advance_n(pos - cursor.pos());
    cursor.decode()
}

#[test]
fn decode_ascii() {
    assert_eq!(decode_at(b"x", 0), Decoded::Char { ch: 'x', len: 1 });
}

#[test]
fn decode_multibyte() {
    let source = "é€😀".as_bytes();
    assert_eq!(decode_at(source, 0), Decoded::Char { ch: 'é', len: 2 });
    assert_eq!(decode_at(source, 2), Decoded::Char { ch: '€', len: 3 });
    assert_eq!(decode_at(source, 5), Decoded::Char { ch: '😀', len: 4 });
}

#[test]
fn decode_does_not_advance() {
    let buf = SourceBuffer::new("é".as_bytes());
    let cursor = buf.cursor();
    let _ = cursor.decode();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn decode_eof_and_interior_null() {
    assert_eq!(decode_at(b"", 0), Decoded::Eof);
    assert_eq!(decode_at(b"a", 1), Decoded::Eof);
    assert_eq!(decode_at(b"\0a", 0), Decoded::InteriorNull);
}

#[test]
fn decode_lone_continuation_byte() {
    assert_eq!(decode_at(b"\x80abc", 0), Decoded::InvalidUtf8 { len: 1 });
}

#[test]
fn decode_bad_lead_bytes() {
    for lead in [0xC0u8, 0xC1, 0xF5, 0xF8, 0xFF] {
        let source = [lead, 0x80, 0x80, 0x80];
        assert_eq!(
            decode_at(&source, 0),
            Decoded::InvalidUtf8 { len: 1 },
            "lead {lead:#x}"
        );
    }
}

#[test]
fn decode_broken_sequence_mid_source() {
    // E2 82 is a valid prefix of '€' cut off by 'x'.
    assert_eq!(decode_at(b"\xE2\x82x", 0), Decoded::InvalidUtf8 { len: 2 });
    // C3 followed by ASCII.
    assert_eq!(decode_at(b"\xC3a", 0), Decoded::InvalidUtf8 { len: 1 });
}

#[test]
fn decode_truncated_at_end_covers_rest() {
    assert_eq!(decode_at(b"\xF0\x9F\x98", 0), Decoded::InvalidUtf8 { len: 3 });
    assert_eq!(decode_at(b"a\xE2", 1), Decoded::InvalidUtf8 { len: 1 });
}

#[test]
fn decode_surrogate_encoding_is_invalid() {
    // ED A0 80 would encode U+D800.
    assert_eq!(decode_at(b"\xED\xA0\x80", 0), Decoded::InvalidUtf8 { len: 1 });
}

#[test]
fn decode_after_bom() {
    let buf = SourceBuffer::new(b"\xEF\xBB\xBF\xEF\xBB\xBF");
    // Only the leading BOM is skipped; a second one is an ordinary U+FEFF.
    assert_eq!(
        buf.cursor().decode(),
        Decoded::Char {
            ch: '\u{FEFF}',
            len: 3
        }
    );
}

#[test]
fn decoded_width() {
    assert_eq!(Decoded::Eof.width(), 0);
    assert_eq!(Decoded::InteriorNull.width(), 1);
    assert_eq!(Decoded::InvalidUtf8 { len: 3 }.width(), 3);
    assert_eq!(Decoded::Char { ch: 'é', len: 2 }.width(), 2);
    assert!(Decoded::Eof.is_eof());
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_decode {
    use crate::{Decoded, SourceBuffer};
    use proptest::prelude::*;

    /// Walk the whole buffer, mapping each decoded unit the way the lossy
    /// std decoder would render it.
    fn decode_lossy(bytes: &[u8]) -> (String, u32) {
        let buf = SourceBuffer::new(bytes);
        let mut cursor = buf.cursor();
        let mut out = String::new();
        let mut steps = 0;
        loop {
            let decoded = cursor.decode();
            match decoded {
                Decoded::Eof => break,
                Decoded::Char { ch, .. } => out.push(ch),
                Decoded::InteriorNull => out.push('\0'),
                Decoded::InvalidUtf8 { .. } => out.push(char::REPLACEMENT_CHARACTER),
            }
            assert!(decoded.width() > 0);
            cursor.advance_n(decoded.width());
            steps += 1;
        }
        assert_eq!(cursor.pos(), cursor.source_len());
        (out, steps)
    }

    proptest! {
        #[test]
        fn valid_text_decodes_to_same_chars(s in "\\PC{0,64}") {
            // A leading U+FEFF is a byte-order mark and is skipped.
            let body = s.strip_prefix('\u{FEFF}').unwrap_or(&s);
            let (decoded, steps) = decode_lossy(s.as_bytes());
            prop_assert_eq!(decoded.as_str(), body);
            prop_assert_eq!(steps as usize, body.chars().count());
        }

        #[test]
        fn arbitrary_bytes_match_lossy_decoder(
            bytes in proptest::collection::vec(any::<u8>(), 0..128)
        ) {
            // A leading BOM is skipped by the buffer; compare past it.
            let body = bytes.strip_prefix(&crate::UTF8_BOM).unwrap_or(&bytes);
            let (decoded, _) = decode_lossy(&bytes);
            prop_assert_eq!(decoded, String::from_utf8_lossy(body).into_owned());
        }
    }
}
