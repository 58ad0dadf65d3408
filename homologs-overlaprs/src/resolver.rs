//! Per-contig feature index and the homolog resolver built on it.
//!
//! [`HomologResolver`] keeps the features of each contig sorted by start so a
//! scan for one hit can stop as soon as it reaches a feature that starts at or
//! after one of the hit's coordinates. Sorting happens when the index is built,
//! so callers can hand over features in any order.
//!
//! # Examples
//!
//! ```
//! use homologs_core::models::{AlignmentHit, GenomicFeature, Strand};
//! use homologs_overlaprs::resolver::IntoHomologResolver;
//!
//! let features = vec![
//!     GenomicFeature { contig_id: "chr1".to_string(), start: 50, end: 90, gene_name: "geneB".to_string(), strand: Strand::Minus },
//!     GenomicFeature { contig_id: "chr1".to_string(), start: 1, end: 40, gene_name: "geneA".to_string(), strand: Strand::Plus },
//! ];
//! let resolver = features.into_homolog_resolver();
//!
//! let hits = vec![AlignmentHit::new("chr1", 60, 55), AlignmentHit::new("chr2", 3, 9)];
//! for (hit, feature) in resolver.find_matches_iter(&hits) {
//!     println!("{} is inside {}", hit, feature.gene_name);
//! }
//! ```

use fxhash::{FxHashMap, FxHashSet};
use log::{debug, info, trace};

use homologs_core::models::{AlignmentHit, GenomicFeature};

use crate::traits::Containment;

///
/// Features grouped by contig, each group sorted by start coordinate.
///
pub struct HomologResolver {
    index_maps: FxHashMap<String, Vec<GenomicFeature>>,
}

/// An iterator over the hits that fall inside a feature, paired with that feature.
///
/// Created by [`HomologResolver::find_matches_iter`]. Hits without a containing
/// feature are skipped. A hit yields at most one pair.
pub struct IterMatches<'a, 'b> {
    resolver: &'a HomologResolver,
    hits: &'b [AlignmentHit],
    hit_idx: usize,
}

impl<'a, 'b> Iterator for IterMatches<'a, 'b> {
    type Item = (&'b AlignmentHit, &'a GenomicFeature);

    fn next(&mut self) -> Option<Self::Item> {
        while self.hit_idx < self.hits.len() {
            let hit = &self.hits[self.hit_idx];
            self.hit_idx += 1;

            if let Some(feature) = self.resolver.find_containing(hit) {
                return Some((hit, feature));
            }
        }
        None
    }
}

impl HomologResolver {
    ///
    /// Build the per-contig index. Features keep their file order among equal
    /// starts.
    ///
    pub fn build(features: Vec<GenomicFeature>) -> Self {
        let mut index_maps: FxHashMap<String, Vec<GenomicFeature>> = FxHashMap::default();

        for feature in features {
            index_maps
                .entry(feature.contig_id.clone())
                .or_default()
                .push(feature);
        }

        for contig_features in index_maps.values_mut() {
            contig_features.sort_by_key(|f| f.start);
        }

        HomologResolver { index_maps }
    }

    ///
    /// Find the first feature, in start order, that contains `hit`.
    ///
    /// Hits on contigs without features never match.
    pub fn find_containing(&self, hit: &AlignmentHit) -> Option<&GenomicFeature> {
        let Some(contig_features) = self.index_maps.get(&hit.subject_id) else {
            debug!(
                "No features on contig '{}' for hit {}-{}",
                hit.subject_id, hit.start, hit.end
            );
            return None;
        };

        for feature in contig_features {
            if feature.is_past(hit) {
                trace!(
                    "Hit {}:{}-{} ends scan at feature {} ({})",
                    hit.subject_id, hit.start, hit.end, feature.gene_name, feature.start
                );
                return None;
            }
            if feature.contains(hit) {
                return Some(feature);
            }
        }
        None
    }

    /// Returns an iterator over `(hit, containing feature)` pairs.
    pub fn find_matches_iter<'a, 'b>(&'a self, hits: &'b [AlignmentHit]) -> IterMatches<'a, 'b> {
        IterMatches {
            resolver: self,
            hits,
            hit_idx: 0,
        }
    }

    ///
    /// Resolve the hits to the unique features that contain at least one of
    /// them, in order of first discovery.
    ///
    pub fn resolve(&self, hits: &[AlignmentHit]) -> Vec<GenomicFeature> {
        let mut seen: FxHashSet<&GenomicFeature> = FxHashSet::default();
        let mut homologs: Vec<GenomicFeature> = Vec::new();
        let mut matched_hits: usize = 0;

        for (_hit, feature) in self.find_matches_iter(hits) {
            matched_hits += 1;
            if seen.insert(feature) {
                homologs.push(feature.clone());
            }
        }

        info!(
            "{} of {} hits fall inside a feature, {} unique homologs",
            matched_hits,
            hits.len(),
            homologs.len()
        );

        homologs
    }

    /// Iterate the contigs that carry at least one feature.
    pub fn iter_contigs(&self) -> impl Iterator<Item = &String> {
        self.index_maps.keys()
    }

    /// Number of indexed features over all contigs.
    pub fn len(&self) -> usize {
        self.index_maps.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.index_maps.is_empty()
    }
}

impl From<Vec<GenomicFeature>> for HomologResolver {
    fn from(features: Vec<GenomicFeature>) -> Self {
        HomologResolver::build(features)
    }
}

/// A trait for converting a collection of features into a [`HomologResolver`].
pub trait IntoHomologResolver {
    fn into_homolog_resolver(self) -> HomologResolver;
}

impl IntoHomologResolver for Vec<GenomicFeature> {
    fn into_homolog_resolver(self) -> HomologResolver {
        HomologResolver::build(self)
    }
}

///
/// Find the unique features containing at least one hit.
///
/// # Arguments
/// - hits: alignment hits, in any order
/// - features: annotated features, in any order
pub fn find_homologs(hits: &[AlignmentHit], features: &[GenomicFeature]) -> Vec<GenomicFeature> {
    HomologResolver::build(features.to_vec()).resolve(hits)
}
