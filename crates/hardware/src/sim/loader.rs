//! Program Loader.
//!
//! Reads a plain-text program file (one 32-character binary instruction word
//! per line) into a [`Program`].

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;
use crate::sim::program::Program;

/// Loads a program file from disk.
///
/// # Arguments
///
/// * `path` - Path to the text file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let program = Program::from_source(&source);
    tracing::info!(path = %path.display(), lines = program.len(), "loaded program");
    Ok(program)
}
