use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for homologs-io operations.
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A row that doesn't match the expected layout of its file format.
    #[error("Malformed record in {path}, line {line}: {reason}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The input file couldn't be opened.
    #[error("Can't read file {path}: {reason}")]
    FileRead { path: PathBuf, reason: String },
}

/// Result type alias for homologs-io operations.
pub type Result<T> = std::result::Result<T, ParseError>;
