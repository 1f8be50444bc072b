//! Scanning session: runs source through the lexer and prints the result.
//!
//! Tokens go to the output stream, one per line; diagnostics go to the error
//! stream. The session remembers whether any lexical error was reported so
//! the file runner can pick the exit status. The prompt clears that flag
//! after every line.

use std::io::{BufRead, Write};
use std::path::Path;

use lox_ir::Token;
use lox_lexer::{scan_all, ReportLog};

use crate::{Diagnostic, DriverError};

pub struct Session<O, E> {
    out: O,
    err: E,
    had_error: bool,
}

impl<O: Write, E: Write> Session<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Session {
            out,
            err,
            had_error: false,
        }
    }

    /// Whether any lexical error was reported since the last reset.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Scan one chunk of source, printing diagnostics then tokens.
    ///
    /// Sources too long for `u32` offsets are refused before scanning.
    pub fn run(&mut self, source: &[u8]) -> Result<(), DriverError> {
        check_len(source.len())?;
        let mut log = ReportLog::new();
        let tokens = scan_all(source, &mut log);
        for report in log.reports() {
            writeln!(self.err, "{}", Diagnostic::from(report))?;
            self.had_error = true;
        }
        self.print_tokens(&tokens)?;
        Ok(())
    }

    fn print_tokens(&mut self, tokens: &[Token]) -> Result<(), DriverError> {
        for token in tokens {
            writeln!(self.out, "{token}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Read and scan a whole script.
    pub fn run_file(&mut self, path: &Path) -> Result<(), DriverError> {
        let source = std::fs::read(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "read script");
        self.run(&source)
    }

    /// Scan `input` line by line until end of input.
    ///
    /// Each line gets a fresh scanner, so line numbers restart at 1. A failed
    /// read is reported and the prompt carries on.
    pub fn run_prompt(&mut self, mut input: impl BufRead) -> Result<(), DriverError> {
        let mut line = Vec::new();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            line.clear();
            match input.read_until(b'\n', &mut line) {
                Ok(0) => {
                    writeln!(self.out)?;
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(error = %e, "failed to read prompt line");
                    writeln!(self.err, "error reading line: {e}")?;
                    continue;
                }
            }
            self.run(&line)?;
            self.had_error = false;
        }
    }
}

/// Byte offsets are `u32`, which bounds the scannable source length.
fn check_len(len: usize) -> Result<(), DriverError> {
    if u32::try_from(len).is_err() {
        return Err(DriverError::TooLarge { len });
    }
    Ok(())
}
