//! Implementation of the `madlib wrap` and `madlib unwrap` commands.

use crate::cli::{UnwrapArgs, WrapArgs};
use crate::config::Config;
use crate::error::Result;
use crate::fs::read_source;
use crate::layout::{unwrap, wrap};

/// Execute the `madlib wrap` command.
pub fn cmd_wrap(args: WrapArgs, config: Config) -> Result<()> {
    let config = config.with_overrides(args.width, None)?;
    let text = read_source(&args.file)?;
    print!("{}", wrap(&text, config.width));
    Ok(())
}

/// Execute the `madlib unwrap` command.
pub fn cmd_unwrap(args: UnwrapArgs) -> Result<()> {
    let text = read_source(&args.file)?;
    print!("{}", unwrap(&text));
    Ok(())
}
