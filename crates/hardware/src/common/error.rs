//! Error definitions.
//!
//! Only malformed input is an error. Instructions the core does not implement
//! decode successfully and are reported through
//! [`ExecOutcome::Ignored`](crate::core::ExecOutcome::Ignored) instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A textual instruction word that is not exactly 32 binary digits.
///
/// Both variants signal "not a valid instruction"; a stepping driver treats
/// either one as the end of the valid program or as a line to skip.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line does not contain exactly 32 characters.
    #[error("malformed instruction word: expected 32 bits, got {len}")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },

    /// A character other than `0` or `1` was found.
    #[error("malformed instruction word: invalid bit {found:?} at position {index}")]
    InvalidBit {
        /// Zero-based position, counted from the most significant bit.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// Failure to read a program source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
