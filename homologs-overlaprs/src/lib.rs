//! Resolution of alignment hits to the annotated features that contain them.
//!
//! A feature is a *homolog* when at least one hit on the same contig lies
//! entirely inside it. Containment has a strict lower bound and an inclusive
//! upper bound, see [`Containment`].
//!
//! ## Quick Start
//!
//! ```rust
//! use homologs_core::models::{AlignmentHit, GenomicFeature, Strand};
//! use homologs_overlaprs::HomologResolver;
//!
//! let features = vec![GenomicFeature {
//!     contig_id: "chr1".to_string(),
//!     start: 5,
//!     end: 10,
//!     gene_name: "geneA".to_string(),
//!     strand: Strand::Plus,
//! }];
//! let resolver = HomologResolver::build(features);
//!
//! let hits = vec![
//!     AlignmentHit::new("chr1", 6, 9),
//!     AlignmentHit::new("chr1", 7, 10),
//!     AlignmentHit::new("chr1", 5, 10), // touches the start, not contained
//! ];
//! let homologs = resolver.resolve(&hits);
//! assert_eq!(homologs.len(), 1);
//! assert_eq!(homologs[0].gene_name, "geneA");
//! ```

/// Per-contig feature index.
///
/// See [`HomologResolver`] for details.
pub mod resolver;

/// Core traits for containment tests.
///
/// See [`Containment`] for the main trait.
pub mod traits;

// re-exports
pub use self::resolver::{HomologResolver, IntoHomologResolver, find_homologs};
pub use self::traits::{Containment, contains};
