//! The interactive madlib session.

use super::engine::{Madlib, render};
use crate::config::{Config, OutputMode};
use crate::error::{MadlibError, Result};
use crate::layout::wrap;
use crate::prompt::Prompter;
use tracing::{debug, info};

const BANNER: &str = "===== Madlib =====";
const ANSWER_PROMPT: &str = "Substitution: ";
const MODE_PROMPT: &str = "Selection (either 1 or 2): ";

/// Run a session: show the template, ask for every blank, then render.
///
/// The rendered text is shown through `prompter` and also returned. The
/// output mode comes from `config.output_mode` when set; otherwise the user
/// is asked.
///
/// # Errors
///
/// Returns `MadlibError::UserError` if the input ends before every question
/// is answered, or any I/O error raised by the prompter.
pub fn run<P: Prompter>(madlib: &Madlib, config: &Config, prompter: &mut P) -> Result<String> {
    prompter.say(BANNER)?;
    prompter.say(&wrap(madlib.source(), config.width))?;

    let mut answers = Vec::with_capacity(madlib.blank_count());
    for blank in madlib.blanks() {
        let context = madlib.context(&blank, config.context_tokens, &config.blank_marker);
        prompter.say("")?;
        prompter.say(&format!("#{}: {}", blank.number, context))?;
        prompter.say(&format!(
            "Now, choose a {} to be substituted for the blank.",
            blank.description.trim()
        ))?;

        let answer = prompter.ask(ANSWER_PROMPT)?.ok_or_else(input_closed)?;
        debug!(blank = blank.number, "answer received");
        answers.push(answer);
    }

    let filled = madlib.fill(&answers)?;
    prompter.say("Substitutions complete! Almost done.")?;

    let mode = match config.output_mode {
        Some(mode) => mode,
        None => choose_mode(prompter)?,
    };
    info!(?mode, width = config.width, "rendering madlib");

    let rendered = render(&filled, mode, config.width);
    prompter.say(&rendered)?;
    Ok(rendered)
}

/// Ask for the output mode until a valid choice is made.
fn choose_mode<P: Prompter>(prompter: &mut P) -> Result<OutputMode> {
    prompter.say("How would you like the output to be presented?")?;
    prompter.say("1. With Automatic Line Wrapping")?;
    prompter.say("2. Without Automatic Line Wrapping (ideal for copy/paste)")?;

    loop {
        let selection = prompter.ask(MODE_PROMPT)?.ok_or_else(input_closed)?;
        if let Some(mode) = OutputMode::from_selection(&selection) {
            return Ok(mode);
        }
        prompter.say("Please enter 1 or 2.")?;
    }
}

fn input_closed() -> MadlibError {
    MadlibError::UserError("input closed before the session was complete".to_string())
}
