//! Lox command-line driver.
//!
//! `lox script.lox` scans a file and prints its tokens; `lox` with no
//! arguments reads lines from stdin. Lexical errors are printed as they are
//! reported and make a script run exit with status 65.

mod args;
mod diagnostic;
mod error;
mod session;
mod tracing_setup;

pub use args::{help_text, parse_args, Command};
pub use diagnostic::Diagnostic;
pub use error::{DriverError, EXIT_DATA_ERR, EXIT_IO_ERR, EXIT_USAGE};
pub use session::Session;
pub use tracing_setup::init_tracing;
