pub mod feature;
pub mod genome;
pub mod hit;
pub mod sequence_record;

// re-export for cleaner imports
pub use self::feature::{GenomicFeature, Strand};
pub use self::genome::Genome;
pub use self::hit::AlignmentHit;
pub use self::sequence_record::SequenceRecord;
