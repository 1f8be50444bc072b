//! Lexical error kinds.
//!
//! The scanner never stops on an error. Each anomaly is described by a
//! [`LexErrorKind`] whose `Display` text is the message handed to the
//! [`ErrorHandler`](crate::ErrorHandler).

/// What kind of lexical anomaly was found.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A string literal hit a newline or the end of input before its closing `"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// Interior `0x00` byte.
    #[error("NUL byte in source")]
    NulByte,
    /// Malformed UTF-8 sequence.
    #[error("invalid UTF-8 encoding")]
    InvalidUtf8,
    /// A well-formed character that starts no token.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}
