//! Token kinds for Lox.

use std::fmt;

/// Closed set of token kinds.
///
/// Kinds carry no payload; decoded string and number values live in
/// [`Literal`](super::Literal) on the token. The discriminant fits in one
/// byte so parsers can keep compact kind tables.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,
    Dot,       // .
    Semicolon, // ;

    // Arithmetic
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /

    // Comparison and assignment
    Bang,  // !
    NotEq, // !=
    Eq,    // =
    EqEq,  // ==
    Gt,    // >
    GtEq,  // >=
    Lt,    // <
    LtEq,  // <=

    // Literals
    Ident,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    True,
    Func,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    Var,
    While,

    /// Unrecognized input: an unexpected character, a NUL byte, or an
    /// invalid UTF-8 sequence.
    Illegal,
    /// End of input. Always the last token, always with an empty lexeme.
    Eof,
}

impl TokenKind {
    /// Human-readable name for diagnostics ("identifier", "`==`", ...).
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Illegal => "illegal character",
            TokenKind::Eof => "end of input",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Bang => "`!`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::True => "true",
            TokenKind::Func => "func",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::Var => "var",
            TokenKind::While => "while",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Variant names are the stable spelling for token dumps; `pad` keeps
        // width and alignment flags working.
        f.pad(&format!("{self:?}"))
    }
}
