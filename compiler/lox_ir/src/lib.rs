//! Lox IR - token model for the Lox front end.
//!
//! This crate holds the value types the lexer produces and the parser
//! consumes:
//! - [`Span`] for byte ranges in the source buffer
//! - [`Token`], [`TokenKind`] and [`Literal`] for classified lexemes
//!
//! Everything here is plain data. Lexing lives in `lox_lexer`; the byte
//! cursor lives in `lox_lexer_core`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Literal, Token, TokenKind};
