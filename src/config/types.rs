//! Config enums and default value functions.

use crate::template::{DEFAULT_BLANK_MARKER, DEFAULT_CONTEXT_TOKENS};
use serde::{Deserialize, Serialize};

/// How the finished madlib is laid out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Break lines at the configured width (default).
    #[default]
    Wrapped,
    /// Everything on one line, ideal for copy/paste.
    Unwrapped,
}

impl OutputMode {
    /// Parse the numbered menu choice shown at the end of a session.
    pub fn from_selection(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Wrapped),
            "2" => Some(Self::Unwrapped),
            _ => None,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_width() -> usize {
    50
}
pub(crate) fn default_context_tokens() -> usize {
    DEFAULT_CONTEXT_TOKENS
}
pub(crate) fn default_blank_marker() -> String {
    DEFAULT_BLANK_MARKER.to_string()
}
