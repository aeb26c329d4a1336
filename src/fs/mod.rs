//! Filesystem helpers for madlib.
//!
//! Reading template sources (a path, or `-` for stdin) and atomically
//! writing rendered output.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{MadlibError, Result};
use std::io::Read;
use std::path::Path;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a whole text source: the file at `path`, or stdin for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| MadlibError::Io(format!("failed to read stdin: {}", e)))?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .map_err(|e| MadlibError::Io(format!("failed to read '{}': {}", path.display(), e)))
}
