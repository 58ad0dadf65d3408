use thiserror::Error;

/// A byte outside of {A, C, G, T}. Non-ASCII bytes are shown escaped.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("invalid base '{}' at position {position}", .base.escape_ascii())]
pub struct InvalidBase {
    pub base: u8,
    pub position: usize,
}

#[derive(Error, Debug, PartialEq)]
pub enum ExtractError {
    #[error("Contig '{0}' not found in genome")]
    MissingContig(String),
    #[error("Feature {name} has an {source}")]
    InvalidBase {
        name: String,
        #[source]
        source: InvalidBase,
    },
    #[error("Feature {name} ({contig}:{start}-{end}) lies outside its contig of length {len}")]
    OutOfBounds {
        name: String,
        contig: String,
        start: u64,
        end: u64,
        len: usize,
    },
}
