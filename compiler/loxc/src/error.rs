//! Driver failures and their process exit codes.

use std::io;
use std::path::PathBuf;

/// Exit code when the script had lexical errors.
pub const EXIT_DATA_ERR: u8 = 65;
/// Exit code for bad command-line usage.
pub const EXIT_USAGE: u8 = 64;
/// Exit code for I/O failures.
pub const EXIT_IO_ERR: u8 = 74;

/// Failure that stops the driver before or while scanning.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Usage: lox [script]")]
    Usage,
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("source is {len} bytes; at most {} bytes can be scanned", u32::MAX)]
    TooLarge { len: usize },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl DriverError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Usage => EXIT_USAGE,
            DriverError::Read { .. } | DriverError::TooLarge { .. } | DriverError::Io(_) => {
                EXIT_IO_ERR
            }
        }
    }
}
