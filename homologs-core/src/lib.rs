//! Core data model shared by the homologs crates.
//!
//! Everything here is built once per run from the input files and never mutated
//! afterwards: alignment hits, annotated features, the genome assembly and the
//! sequence records that end up in the output.
pub mod config;
pub mod errors;
pub mod models;
pub mod utils;
