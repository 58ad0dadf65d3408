//! # Input/Output for the homolog pipeline.
//!
//! Loaders for the three inputs (a tabular BLAST report, a BED-like feature
//! file and a FASTA assembly) and writers for the two outputs (FASTA records
//! and BED features). Every reader accepts gzipped files, detected by a `.gz`
//! extension. Malformed rows are fatal and reported with their line number.
//!
pub mod bed;
pub mod blast;
pub mod error;
pub mod fasta;

// re-expose core functions
pub use bed::*;
pub use blast::*;
pub use error::*;
pub use fasta::*;
