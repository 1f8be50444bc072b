//! Hand-written scanner producing owned [`Token`]s.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] and emits one token per
//! call to [`Scanner::scan_token`]. Whitespace and `//` comments are skipped before
//! each token. Anomalies (unterminated strings, NUL bytes, bad encodings,
//! stray characters) are reported to the [`ErrorHandler`] and scanning
//! carries on; the offending bytes still become a token.
//!
//! # Dispatch
//!
//! Tokens start on ASCII bytes, so the main dispatch matches the current
//! byte. Only the illegal-token path, string bodies and comments holding
//! NUL or malformed bytes decode full code points, which is where encoding
//! errors surface.

use lox_ir::{Literal, Span, Token, TokenKind};
use lox_lexer_core::{Cursor, Decoded, SourceBuffer};
use tracing::{debug, trace};

use crate::keywords;
use crate::{ErrorHandler, LexErrorKind};

/// Single-use scanner over one source buffer.
///
/// Owns its cursor, line counter and error handler. Drive it with
/// [`scan_token`](Self::scan_token), [`scan_tokens`](Self::scan_tokens), or as an
/// [`Iterator`].
pub struct Scanner<'a, H: ErrorHandler> {
    cursor: Cursor<'a>,
    handler: H,
    /// Offset of the first byte of the token being scanned.
    start: u32,
    /// 1-based line of the cursor.
    line: u32,
    errors: usize,
    /// Set once the iterator has yielded `Eof`.
    finished: bool,
}

impl<'a, H: ErrorHandler> Scanner<'a, H> {
    /// Create a scanner positioned after any byte-order mark.
    pub fn new(source: &'a SourceBuffer, handler: H) -> Self {
        let cursor = source.cursor();
        debug!(
            source_len = source.len(),
            bom = source.has_bom(),
            "scanner created"
        );
        Self {
            cursor,
            handler,
            start: cursor.pos(),
            line: 1,
            errors: 0,
            finished: false,
        }
    }

    /// Number of reports sent to the handler so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Scan the rest of the input, ending with exactly one `Eof` token.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token();
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return tokens;
            }
        }
    }

    /// Produce the next token.
    ///
    /// Returns an `Eof` token with an empty lexeme when the source is
    /// exhausted. Subsequent calls after EOF continue to return `Eof`.
    pub fn scan_token(&mut self) -> Token {
        self.skip_trivia();
        self.start = self.cursor.pos();
        let token = self.next_token();
        trace!(
            kind = token.kind.display_name(),
            line = token.line,
            span_start = token.span.start,
            span_end = token.span.end,
            "token"
        );
        token
    }

    /// Skip whitespace and line comments, counting newlines.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' => self.cursor.advance(),
                b'\n' => {
                    self.cursor.advance();
                    self.line += 1;
                }
                b'/' if self.cursor.peek() == b'/' => self.comment(),
                _ => return,
            }
        }
    }

    /// Skip a `//` comment up to, not including, the newline.
    ///
    /// Clean lines are skipped in one step. Otherwise the body is decoded so
    /// NUL bytes and bad encodings are reported like anywhere else.
    fn comment(&mut self) {
        self.cursor.advance_n(2);
        if self.cursor.eat_clean_line() {
            return;
        }
        loop {
            match self.cursor.decode() {
                Decoded::Char { ch: '\n', .. } | Decoded::Eof => return,
                Decoded::Char { len, .. } => self.cursor.advance_n(len),
                Decoded::InteriorNull => {
                    self.error(self.cursor.pos(), LexErrorKind::NulByte);
                    self.cursor.advance();
                }
                Decoded::InvalidUtf8 { len } => {
                    self.error(self.cursor.pos(), LexErrorKind::InvalidUtf8);
                    self.cursor.advance_n(len);
                }
            }
        }
    }

    fn next_token(&mut self) -> Token {
        match self.cursor.current() {
            0 if self.cursor.is_eof() => Token::eof(self.line, self.cursor.pos()),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            b'.' => self.single(TokenKind::Dot),
            b'-' => self.single(TokenKind::Minus),
            b'+' => self.single(TokenKind::Plus),
            b';' => self.single(TokenKind::Semicolon),
            b'*' => self.single(TokenKind::Star),
            // Comments were consumed by `skip_trivia`.
            b'/' => self.single(TokenKind::Slash),
            b'!' => self.with_equal(TokenKind::NotEq, TokenKind::Bang),
            b'=' => self.with_equal(TokenKind::EqEq, TokenKind::Eq),
            b'<' => self.with_equal(TokenKind::LtEq, TokenKind::Lt),
            b'>' => self.with_equal(TokenKind::GtEq, TokenKind::Gt),
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            _ => self.illegal(),
        }
    }

    // ─── Operators ──────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(kind, Literal::None)
    }

    /// `x=` if the next byte is `=`, else plain `x`.
    fn with_equal(&mut self, pair: TokenKind, lone: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(pair, Literal::None)
        } else {
            self.token(lone, Literal::None)
        }
    }

    // ─── Literals ───────────────────────────────────────────────────────

    /// String literal. Ends at the closing `"`, a newline, or EOF.
    ///
    /// An unterminated string is reported at its opening quote and still
    /// yields a `String` token; the newline is left for the next scan.
    fn string(&mut self) -> Token {
        self.cursor.advance(); // consume opening '"'
        let body_start = self.cursor.pos();
        loop {
            match self.cursor.decode() {
                Decoded::Char { ch: '"', .. } => {
                    let body = lossy(self.cursor.bytes_from(body_start));
                    self.cursor.advance(); // consume closing '"'
                    return self.token(TokenKind::String, Literal::Str(body));
                }
                Decoded::Char { ch: '\n', .. } | Decoded::Eof => {
                    self.error(self.start, LexErrorKind::UnterminatedString);
                    let body = lossy(self.cursor.bytes_from(body_start));
                    return self.token(TokenKind::String, Literal::Str(body));
                }
                Decoded::Char { len, .. } => self.cursor.advance_n(len),
                Decoded::InteriorNull => {
                    self.error(self.cursor.pos(), LexErrorKind::NulByte);
                    self.cursor.advance();
                }
                Decoded::InvalidUtf8 { len } => {
                    self.error(self.cursor.pos(), LexErrorKind::InvalidUtf8);
                    self.cursor.advance_n(len);
                }
            }
        }
    }

    /// Decimal digits with an optional fraction. The `.` is only consumed
    /// when a digit follows it, so `1.` is `Number Dot`.
    fn number(&mut self) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        let text = self.lexeme();
        self.token(TokenKind::Number, Literal::Number(text))
    }

    fn identifier(&mut self) -> Token {
        self.cursor.advance(); // first byte already classified
        self.cursor.eat_while(is_ident_continue);
        let text = self.lexeme();
        let kind = keywords::lookup(&text).unwrap_or(TokenKind::Ident);
        Token::new(kind, text, Literal::None, self.line, self.span())
    }

    // ─── Error tokens ───────────────────────────────────────────────────

    /// One code point that starts no token, or one malformed sequence.
    fn illegal(&mut self) -> Token {
        let decoded = self.cursor.decode();
        let kind = match decoded {
            Decoded::Char { ch, .. } => LexErrorKind::UnexpectedChar(ch),
            Decoded::InteriorNull => LexErrorKind::NulByte,
            Decoded::InvalidUtf8 { .. } => LexErrorKind::InvalidUtf8,
            Decoded::Eof => return Token::eof(self.line, self.cursor.pos()),
        };
        self.error(self.start, kind);
        self.cursor.advance_n(decoded.width());
        self.token(TokenKind::Illegal, Literal::None)
    }

    // ─── Helpers ────────────────────────────────────────────────────────

    fn span(&self) -> Span {
        Span::new(self.start, self.cursor.pos())
    }

    fn lexeme(&self) -> String {
        lossy(self.cursor.bytes_from(self.start))
    }

    fn token(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(kind, self.lexeme(), literal, self.line, self.span())
    }

    fn error(&mut self, offset: u32, kind: LexErrorKind) {
        debug!(offset, line = self.line, error = %kind, "lex error");
        self.errors += 1;
        self.handler.report(offset, self.line, &kind.to_string());
    }
}

impl<H: ErrorHandler> Iterator for Scanner<'_, H> {
    type Item = Token;

    /// Yields every token up to and including `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.scan_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

/// Returns `true` for ASCII letters, digits, and `_`.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Decode token bytes, replacing malformed sequences with U+FFFD.
fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
