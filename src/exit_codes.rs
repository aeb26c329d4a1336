//! Exit code constants for the madlib CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, bad answers)
//! - 2: Template error (unbalanced grouping parentheses)
//! - 3: I/O failure (reading a template, writing output)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or unusable answers.
pub const USER_ERROR: i32 = 1;

/// Template error: the template could not be tokenized.
pub const TEMPLATE_ERROR: i32 = 2;

/// I/O failure: a file or stream could not be read or written.
pub const IO_FAILURE: i32 = 3;
