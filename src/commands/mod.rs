//! Command implementations for madlib.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod inspect;
mod play;
mod reflow;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function with the resolved config.
pub fn dispatch(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Play(args) => play::cmd_play(args, config),
        Command::Blanks(args) => inspect::cmd_blanks(args),
        Command::Tokens(args) => inspect::cmd_tokens(args),
        Command::Wrap(args) => reflow::cmd_wrap(args, config),
        Command::Unwrap(args) => reflow::cmd_unwrap(args),
    }
}
