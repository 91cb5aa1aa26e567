//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! stepping driver. It provides:
//! 1. **Defaults:** Baseline behavior when a field is omitted.
//! 2. **Structures:** Hierarchical config, currently a single `general` section.
//! 3. **Enums:** The policy for lines that are not valid instruction words.
//!
//! Configuration is supplied as JSON (`sim run --config cfg.json`) or built
//! with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Instruction tracing is off unless requested.
    pub const TRACE_INSTRUCTIONS: bool = false;

    /// An `exit` instruction stops the stepping driver.
    pub const HALT_ON_EXIT: bool = true;
}

/// What the stepping driver does with a line that is not a valid instruction word.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum MalformedLinePolicy {
    /// Treat the line as the end of the valid program.
    #[default]
    #[serde(alias = "HALT", alias = "halt")]
    Halt,
    /// Skip the line and continue with the next one.
    #[serde(alias = "SKIP", alias = "skip")]
    Skip,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mips_core::config::{Config, MalformedLinePolicy};
///
/// let json = r#"{ "general": { "malformed_lines": "Skip" } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.malformed_lines, MalformedLinePolicy::Skip);
/// assert!(config.general.halt_on_exit);
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text; omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// General simulation settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log every executed instruction at `info` level instead of `trace`.
    #[serde(default = "GeneralConfig::default_trace_instructions")]
    pub trace_instructions: bool,
    /// Policy for lines that are not 32 binary digits.
    #[serde(default)]
    pub malformed_lines: MalformedLinePolicy,
    /// Whether an `exit` instruction halts the stepping driver.
    #[serde(default = "GeneralConfig::default_halt_on_exit")]
    pub halt_on_exit: bool,
}

impl GeneralConfig {
    const fn default_trace_instructions() -> bool {
        defaults::TRACE_INSTRUCTIONS
    }

    const fn default_halt_on_exit() -> bool {
        defaults::HALT_ON_EXIT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            malformed_lines: MalformedLinePolicy::default(),
            halt_on_exit: defaults::HALT_ON_EXIT,
        }
    }
}
