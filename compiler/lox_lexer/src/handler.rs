//! Error reporting channel.
//!
//! The scanner pushes each lexical anomaly to an [`ErrorHandler`] the moment
//! it is found. Reports carry the byte offset of the anomaly, the 1-based
//! line, and a human-readable message. Handlers cannot influence scanning.

/// Receiver for lexical error reports.
///
/// Any `FnMut(u32, u32, &str)` closure is a handler:
///
/// ```
/// let mut errors = 0;
/// let tokens = lox_lexer::scan_all(b"\"open", |_offset: u32, _line: u32, _msg: &str| errors += 1);
/// assert_eq!(errors, 1);
/// assert!(tokens.last().is_some_and(|t| t.is_eof()));
/// ```
pub trait ErrorHandler {
    /// Called once per anomaly, in the order the scanner finds them.
    fn report(&mut self, offset: u32, line: u32, message: &str);
}

impl<F> ErrorHandler for F
where
    F: FnMut(u32, u32, &str),
{
    #[inline]
    fn report(&mut self, offset: u32, line: u32, message: &str) {
        self(offset, line, message);
    }
}

/// One collected error report.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Report {
    pub offset: u32,
    pub line: u32,
    pub message: String,
}

/// Handler that records every report in order.
///
/// Pass `&mut log` to the scanner to keep the log readable afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReportLog {
    reports: Vec<Report>,
}

impl ReportLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ErrorHandler for ReportLog {
    fn report(&mut self, offset: u32, line: u32, message: &str) {
        self.reports.push(Report {
            offset,
            line,
            message: message.to_owned(),
        });
    }
}

impl ErrorHandler for &mut ReportLog {
    fn report(&mut self, offset: u32, line: u32, message: &str) {
        (**self).report(offset, line, message);
    }
}
