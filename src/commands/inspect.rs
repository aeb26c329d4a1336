//! Implementation of the `madlib blanks` and `madlib tokens` commands.

use crate::cli::InspectArgs;
use crate::error::{MadlibError, Result};
use crate::fs::read_source;
use crate::session::{Blank, Madlib};
use crate::template::Token;
use serde::Serialize;

/// Execute the `madlib blanks` command.
pub fn cmd_blanks(args: InspectArgs) -> Result<()> {
    let madlib = Madlib::parse(&read_source(&args.template)?)?;
    let blanks = madlib.blanks();

    if args.json {
        println!("{}", to_json(&blanks)?);
    } else {
        print!("{}", format_blanks(&blanks));
    }
    Ok(())
}

/// Execute the `madlib tokens` command.
pub fn cmd_tokens(args: InspectArgs) -> Result<()> {
    let madlib = Madlib::parse(&read_source(&args.template)?)?;

    if args.json {
        println!("{}", to_json(madlib.tokens())?);
    } else {
        print!("{}", format_tokens(madlib.tokens()));
    }
    Ok(())
}

/// One line per blank: number, byte offset, description.
pub(crate) fn format_blanks(blanks: &[Blank<'_>]) -> String {
    if blanks.is_empty() {
        return "No blanks found.\n".to_string();
    }

    let mut out = format!("Blanks ({}):\n", blanks.len());
    for blank in blanks {
        out.push_str(&format!(
            "  #{:<3} at byte {:<6} {}\n",
            blank.number,
            blank.offset,
            blank.description.trim()
        ));
    }
    out
}

/// One line per token: offset, kind, escaped text.
pub(crate) fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:>6}  {:<11}  {:?}\n", t.start(), t.kind().to_string(), t.text()))
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| MadlibError::UserError(format!("failed to serialize JSON: {}", e)))
}
