use homologs_core::models::{AlignmentHit, GenomicFeature};

///
/// Containment of an alignment hit in an annotated region.
///
/// Regions are 1-based and inclusive, but containment uses a strict lower
/// bound: a hit starting or ending on the first base of a region is not
/// inside it.
///
pub trait Containment {
    /// Both hit coordinates fall in `(start, end]` of the region.
    fn contains(&self, hit: &AlignmentHit) -> bool;

    /// A hit coordinate sits at or before the start of the region. Neither this
    /// region nor any region starting further right can contain the hit.
    fn is_past(&self, hit: &AlignmentHit) -> bool;
}

impl Containment for GenomicFeature {
    #[inline]
    fn contains(&self, hit: &AlignmentHit) -> bool {
        hit.start > self.start
            && hit.start <= self.end
            && hit.end > self.start
            && hit.end <= self.end
    }

    #[inline]
    fn is_past(&self, hit: &AlignmentHit) -> bool {
        hit.start <= self.start || hit.end <= self.start
    }
}

///
/// Is `hit` contained in `feature`? Contig identifiers are not compared.
///
#[inline]
pub fn contains(hit: &AlignmentHit, feature: &GenomicFeature) -> bool {
    feature.contains(hit)
}
