//! Implementation of the `madlib play` command.
//!
//! Runs an interactive session on the terminal, or replays answers from a
//! YAML file when `--answers` is given.

use crate::cli::PlayArgs;
use crate::config::{Config, OutputMode};
use crate::error::{MadlibError, Result};
use crate::fs::{STDIN_PATH, atomic_write_file, read_source};
use crate::prompt::{Console, Scripted};
use crate::session::{self, Madlib};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Execute the `madlib play` command.
pub fn cmd_play(args: PlayArgs, config: Config) -> Result<()> {
    run_play(args, config, io::stdout())
}

/// Run `play`, writing the session to `out`.
///
/// Interactive sessions read answers from stdin; replayed sessions never
/// read stdin for answers.
pub(crate) fn run_play<W: Write>(args: PlayArgs, config: Config, out: W) -> Result<()> {
    let mut config = config.with_overrides(args.width, args.mode)?;
    check_stdin_use(&args)?;

    let template = read_source(&args.template)?;
    let madlib = Madlib::parse(&template)?;
    info!(
        template = %args.template.display(),
        blanks = madlib.blank_count(),
        "template loaded"
    );

    let rendered = match &args.answers {
        Some(path) => {
            let answers = load_answers(path)?;
            // Fail before the banner is shown rather than after the last blank.
            madlib.check_answer_count(answers.len())?;
            // Nobody is there to ask, so fall back to the default layout.
            if config.output_mode.is_none() {
                config.output_mode = Some(OutputMode::default());
            }
            let mut prompter = Scripted::new(answers, out);
            session::run(&madlib, &config, &mut prompter)?
        }
        None => {
            let mut prompter = Console::new(io::stdin().lock(), out);
            session::run(&madlib, &config, &mut prompter)?
        }
    };

    if let Some(output) = &args.output {
        atomic_write_file(output, &format!("{}\n", rendered))?;
        info!(output = %output.display(), "story written");
    }

    Ok(())
}

/// Stdin can feed only one of the template, the answers file, or the
/// interactive prompts.
fn check_stdin_use(args: &PlayArgs) -> Result<()> {
    if args.template.as_os_str() != STDIN_PATH {
        return Ok(());
    }
    match &args.answers {
        None => Err(MadlibError::UserError(
            "reading the template from stdin requires --answers".to_string(),
        )),
        Some(path) if path.as_os_str() == STDIN_PATH => Err(MadlibError::UserError(
            "the template and the answers cannot both be read from stdin".to_string(),
        )),
        Some(_) => Ok(()),
    }
}

/// Load answers from a YAML file.
fn load_answers(path: &Path) -> Result<Vec<String>> {
    let content = read_source(path)?;
    parse_answers(&content)
        .map_err(|e| MadlibError::UserError(format!("{} ('{}')", e, path.display())))
}

/// Parse a YAML sequence of answers.
pub(crate) fn parse_answers(yaml: &str) -> Result<Vec<String>> {
    serde_yaml::from_str(yaml)
        .map_err(|e| MadlibError::UserError(format!("failed to parse answers YAML: {}", e)))
}
