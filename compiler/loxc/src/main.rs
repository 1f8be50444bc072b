//! Lox CLI
//!
//! Scans a script or REPL input and prints the tokens.

use std::io;
use std::process::ExitCode;

use loxc::{help_text, init_tracing, parse_args, Command, DriverError, Session, EXIT_DATA_ERR};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "driver failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, DriverError> {
    match parse_args(args)? {
        Command::Help => println!("{}", help_text()),
        Command::Version => println!("lox {}", env!("CARGO_PKG_VERSION")),
        Command::Prompt => stdio_session().run_prompt(io::stdin().lock())?,
        Command::File(path) => {
            let mut session = stdio_session();
            session.run_file(&path)?;
            if session.had_error() {
                return Ok(ExitCode::from(EXIT_DATA_ERR));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn stdio_session() -> Session<io::StdoutLock<'static>, io::StderrLock<'static>> {
    Session::new(io::stdout().lock(), io::stderr().lock())
}
