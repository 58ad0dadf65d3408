use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ModelError;

/// Strand a feature is read from.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Strand {
    Plus,
    Minus,
}

impl FromStr for Strand {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            _ => Err(ModelError::InvalidStrand(s.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
        }
    }
}

///
/// GenomicFeature struct, one annotated region of a BED-like feature file
///
/// Coordinates are 1-based and inclusive on both ends, so the bases of the
/// feature are `sequence[start - 1..end]`. Equality and hashing cover all five
/// fields, which is what homolog deduplication keys on.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GenomicFeature {
    pub contig_id: String,
    pub start: u64,
    pub end: u64,
    pub gene_name: String,
    pub strand: Strand,
}

impl GenomicFeature {
    ///
    /// Get the 6 column BED line of the feature. The score column is written
    /// as a placeholder.
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t0\t{}",
            self.contig_id, self.start, self.end, self.gene_name, self.strand
        )
    }
}

impl Display for GenomicFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
