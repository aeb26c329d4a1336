//! Error types for the madlib CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::fmt;
use thiserror::Error;

/// Why a template's grouping parentheses could not be tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// `(` encountered while a group was already open.
    Nested,
    /// `)` encountered with no open group.
    UnmatchedClose,
    /// Input ended while a group was still open.
    Unterminated,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::Nested => write!(f, "nested grouping is undefined"),
            GroupError::UnmatchedClose => {
                write!(f, "closing parenthesis without matching opening parenthesis")
            }
            GroupError::Unterminated => write!(f, "group opened but never closed"),
        }
    }
}

/// Main error type for madlib operations.
#[derive(Error, Debug)]
pub enum MadlibError {
    /// The template has mismatched or nested grouping parentheses.
    #[error("Unbalanced group at byte {offset}: {reason}")]
    UnbalancedGroup { reason: GroupError, offset: usize },

    /// User provided invalid arguments, configuration, or answers.
    #[error("{0}")]
    UserError(String),

    /// Reading or writing a file or stream failed.
    #[error("I/O failure: {0}")]
    Io(String),
}

impl MadlibError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MadlibError::UnbalancedGroup { .. } => exit_codes::TEMPLATE_ERROR,
            MadlibError::UserError(_) => exit_codes::USER_ERROR,
            MadlibError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for madlib operations.
pub type Result<T> = std::result::Result<T, MadlibError>;
