//! CLI argument parsing for madlib.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::OutputMode;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Madlib: fill in the blanks of a text template.
///
/// Blanks are written as `(@description)`, e.g. `I (@verb) every day`.
/// Parentheses group text: whitespace inside `( )` does not split words.
#[derive(Parser, Debug)]
#[command(name = "madlib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML config file (defaults to $MADLIB_CONFIG, then built-in defaults).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for madlib.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a template interactively.
    ///
    /// Shows the template, asks for a word for each blank, then prints
    /// the finished story.
    Play(PlayArgs),

    /// List the blanks in a template.
    Blanks(InspectArgs),

    /// Show how a template is split into tokens.
    Tokens(InspectArgs),

    /// Wrap text at a line width, breaking only at spaces and tabs.
    Wrap(WrapArgs),

    /// Join all lines of a text into one.
    Unwrap(UnwrapArgs),
}

/// Arguments for the `play` command.
#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// Template file, or `-` for stdin.
    pub template: PathBuf,

    /// Line width for wrapped output.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Output layout; skips the question at the end.
    #[arg(short, long, value_enum)]
    pub mode: Option<OutputMode>,

    /// YAML list of answers, one per blank, used instead of prompting.
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Also write the finished story to this file.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `blanks` and `tokens` commands.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Template file, or `-` for stdin.
    pub template: PathBuf,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `wrap` command.
#[derive(Parser, Debug)]
pub struct WrapArgs {
    /// Text file, or `-` for stdin.
    pub file: PathBuf,

    /// Line width (defaults to the configured width).
    #[arg(short, long)]
    pub width: Option<usize>,
}

/// Arguments for the `unwrap` command.
#[derive(Parser, Debug)]
pub struct UnwrapArgs {
    /// Text file, or `-` for stdin.
    pub file: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
