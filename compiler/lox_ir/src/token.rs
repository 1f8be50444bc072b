//! Token types for the Lox lexer.
//!
//! A [`Token`] is an immutable record of one classified lexeme. It owns its
//! text, so token lists outlive the scanner and the source buffer.

mod kind;
mod literal;

pub use kind::TokenKind;
pub use literal::Literal;

use std::fmt;

use super::Span;

/// A token: kind, exact source text, optional decoded payload, and location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token. Empty for end-of-input.
    pub lexeme: String,
    /// Decoded payload for string and number literals.
    pub literal: Literal,
    /// 1-based line where the token begins.
    pub line: u32,
    /// Byte range of the lexeme in the source buffer.
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// Create the end-of-input token at `offset`.
    pub fn eof(line: u32, offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: Literal::None,
            line,
            span: Span::point(offset),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4} {:<10} {:?}", self.line, self.kind, self.lexeme)?;
        if !self.literal.is_none() {
            write!(f, " => {}", self.literal)?;
        }
        Ok(())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}
