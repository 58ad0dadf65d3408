//! Turning homolog features into sequences.
//!
//! [`alphabet`] holds the fixed nucleotide complement table and reverse
//! complement; [`extract`] slices features out of a [`Genome`](homologs_core::models::Genome)
//! and applies the duplicate gene name policy.
pub mod alphabet;
pub mod error;
pub mod extract;

pub use self::alphabet::{complement, reverse_complement, validate_bases};
pub use self::error::{ExtractError, InvalidBase};
pub use self::extract::{SequenceExtractor, extract_homologs};
