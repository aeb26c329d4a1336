//! Config loading, validation, and command-line overrides.

use super::model::Config;
use super::types::OutputMode;
use crate::error::{MadlibError, Result};
use std::path::Path;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "MADLIB_CONFIG";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MadlibError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MadlibError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for this run.
    ///
    /// Uses `explicit` if given, otherwise the file named by `MADLIB_CONFIG`,
    /// otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MadlibError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `width` must be positive
    /// - `blank_marker` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(MadlibError::UserError(
                "config validation failed: width must be greater than 0".to_string(),
            ));
        }

        if self.blank_marker.is_empty() {
            return Err(MadlibError::UserError(
                "config validation failed: blank_marker must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(
        mut self,
        width: Option<usize>,
        mode: Option<OutputMode>,
    ) -> Result<Self> {
        if let Some(width) = width {
            self.width = width;
        }
        if mode.is_some() {
            self.output_mode = mode;
        }
        self.validate()?;
        Ok(self)
    }
}
