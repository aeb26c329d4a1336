//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for madlib sessions.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
/// Command-line flags take precedence over values loaded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wrap width used for the template preview and wrapped output.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Output layout. When unset, the session asks at the end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_mode: Option<OutputMode>,

    /// Tokens shown on each side of a blank when prompting for it.
    #[serde(default = "default_context_tokens")]
    pub context_tokens: usize,

    /// Marker standing in for the blank being asked about.
    #[serde(default = "default_blank_marker")]
    pub blank_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            output_mode: None,
            context_tokens: default_context_tokens(),
            blank_marker: default_blank_marker(),
        }
    }
}
