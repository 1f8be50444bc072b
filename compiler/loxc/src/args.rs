//! Command-line parsing.
//!
//! `lox [script]`, plus `-h`/`--help` and `-V`/`--version`.

use std::path::PathBuf;

use crate::DriverError;

/// What the driver was asked to do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Interactive prompt on stdin.
    Prompt,
    /// Scan one script file.
    File(PathBuf),
    Help,
    Version,
}

/// Parse arguments (program name already stripped).
///
/// Arguments are read left to right and the first help or version flag
/// stops parsing. A second script or an unknown flag is a usage error.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, DriverError> {
    let mut script = None;
    for arg in args {
        match arg.as_ref() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            flag if flag.starts_with('-') => {
                tracing::debug!(flag, "unknown flag");
                return Err(DriverError::Usage);
            }
            path if script.is_none() => script = Some(PathBuf::from(path)),
            _ => return Err(DriverError::Usage),
        }
    }
    Ok(script.map_or(Command::Prompt, Command::File))
}

pub fn help_text() -> String {
    format!(
        "lox {}\n\
         Scan a Lox script and print its tokens.\n\
         \n\
         Usage: lox [script]\n\
         \n\
         With no script, reads lines from stdin.\n\
         \n\
         Options:\n  \
           -h, --help       Print this help\n  \
           -V, --version    Print version\n\
         \n\
         Environment:\n  \
           RUST_LOG         Enable tracing output (e.g. RUST_LOG=lox_lexer=trace)\n  \
           LOX_LOG_TREE     With RUST_LOG, print traces as an indented tree",
        env!("CARGO_PKG_VERSION")
    )
}
