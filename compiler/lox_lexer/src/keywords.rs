//! Reserved keyword lookup.
//!
//! Keywords are 2-6 ASCII lowercase letters. The lookup uses the
//! identifier's length as a first-pass filter, then matches against the
//! keywords of that length. A miss means the text is a plain identifier.

use lox_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Matching is exact and case-sensitive: `While` is an identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-6 chars and start with ASCII lowercase
    if !(2..=6).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "func" => Some(TokenKind::Func),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
