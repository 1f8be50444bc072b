//! Rendering of lexical error reports.

use std::fmt;

use lox_lexer::Report;

/// A report formatted as `[line L] Error at offset O: <message>`.
#[derive(Clone, Copy, Debug)]
pub struct Diagnostic<'a> {
    pub line: u32,
    pub offset: u32,
    pub message: &'a str,
}

impl<'a> From<&'a Report> for Diagnostic<'a> {
    fn from(report: &'a Report) -> Self {
        Diagnostic {
            line: report.line,
            offset: report.offset,
            message: &report.message,
        }
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error at offset {}: {}",
            self.line, self.offset, self.message
        )
    }
}
