//! Madlib: interactive template filler.
//!
//! This is the main entry point for the `madlib` CLI. It parses arguments,
//! sets up diagnostics, resolves configuration, dispatches to the
//! appropriate command handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod layout;
mod logging;
pub mod prompt;
pub mod session;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let result = Config::resolve(cli.config.as_deref())
        .and_then(|config| commands::dispatch(cli.command, config));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
