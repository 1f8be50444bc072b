//! Lexer for Lox.
//!
//! Turns raw source bytes into an ordered list of [`Token`]s ending in exactly
//! one `Eof`. The byte-level work (sentinel buffer, cursor, UTF-8 decoding)
//! lives in `lox_lexer_core`; this crate classifies lexemes, resolves
//! keywords, and reports lexical errors through an [`ErrorHandler`].
//!
//! Scanning never fails. Malformed input produces `Illegal` (or
//! unterminated `String`) tokens plus one report per anomaly.
//!
//! ```
//! use lox_ir::TokenKind;
//! use lox_lexer::{scan_all, ReportLog};
//!
//! let mut log = ReportLog::new();
//! let tokens = scan_all(b"var x = 1;", &mut log);
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Var, TokenKind::Ident, TokenKind::Eq, TokenKind::Number, TokenKind::Semicolon, TokenKind::Eof]
//! );
//! assert!(log.is_empty());
//! ```

mod handler;
mod keywords;
mod lex_error;
mod scanner;

pub use handler::{ErrorHandler, Report, ReportLog};
pub use lex_error::LexErrorKind;
pub use scanner::Scanner;

use lox_ir::Token;
use lox_lexer_core::SourceBuffer;

/// Scan `source` to completion.
///
/// Every anomaly is reported to `handler` as it is found; the returned list
/// always ends with a single `Eof` token.
#[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
pub fn scan_all<H: ErrorHandler>(source: &[u8], handler: H) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(&buf, handler);
    let tokens = scanner.scan_tokens();
    tracing::debug!(
        tokens = tokens.len(),
        errors = scanner.error_count(),
        "scan complete"
    );
    tokens
}
