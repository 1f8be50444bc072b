//! Decoded token payloads.

use std::fmt;

/// Payload attached to a token.
///
/// Strings are stored with their quotes stripped and no escape processing.
/// Numbers keep their raw source text; conversion to a numeric value is the
/// parser's job.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Literal {
    #[default]
    None,
    Str(String),
    Number(String),
}

impl Literal {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("nil"),
            Literal::Str(s) => write!(f, "{s:?}"),
            Literal::Number(text) => f.write_str(text),
        }
    }
}
