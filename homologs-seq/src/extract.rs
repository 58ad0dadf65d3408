use fxhash::FxHashMap;
use log::{debug, info};

use homologs_core::config::DuplicateNamePolicy;
use homologs_core::models::{Genome, GenomicFeature, SequenceRecord, Strand};

use crate::alphabet::{reverse_complement, validate_bases};
use crate::error::ExtractError;

///
/// Slices homolog features out of a genome.
///
/// Plus strand features are returned as they appear in the assembly; minus
/// strand features are reverse complemented. Only A, C, G and T are accepted
/// in an extracted region, on either strand.
///
pub struct SequenceExtractor<'a> {
    genome: &'a Genome,
    policy: DuplicateNamePolicy,
}

impl<'a> SequenceExtractor<'a> {
    pub fn new(genome: &'a Genome) -> Self {
        SequenceExtractor {
            genome,
            policy: DuplicateNamePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicateNamePolicy) -> Self {
        self.policy = policy;
        self
    }

    ///
    /// Get the bases of a single feature, read in the feature's orientation.
    ///
    pub fn extract_feature(&self, feature: &GenomicFeature) -> Result<String, ExtractError> {
        let contig = self
            .genome
            .get(&feature.contig_id)
            .ok_or_else(|| ExtractError::MissingContig(feature.contig_id.clone()))?;

        if feature.start == 0 || feature.start > feature.end || feature.end > contig.len() as u64 {
            return Err(ExtractError::OutOfBounds {
                name: feature.gene_name.clone(),
                contig: feature.contig_id.clone(),
                start: feature.start,
                end: feature.end,
                len: contig.len(),
            });
        }

        // 1-based inclusive to 0-based half open, on bytes so any input slices
        let region = &contig.as_bytes()[(feature.start - 1) as usize..feature.end as usize];

        let invalid = |source| ExtractError::InvalidBase {
            name: feature.gene_name.clone(),
            source,
        };

        match feature.strand {
            Strand::Plus => {
                validate_bases(region).map_err(invalid)?;
                // validated bases are ASCII
                Ok(String::from_utf8_lossy(region).into_owned())
            }
            Strand::Minus => reverse_complement(region).map_err(invalid),
        }
    }

    ///
    /// Build the output records for a set of homologs.
    ///
    /// # Arguments
    /// - homologs: unique homolog features, in output order
    ///
    /// # Returns
    /// One record per homolog, or one per gene name under
    /// [`DuplicateNamePolicy::Concatenate`]
    pub fn extract(&self, homologs: &[GenomicFeature]) -> Result<Vec<SequenceRecord>, ExtractError> {
        let mut records: Vec<SequenceRecord> = Vec::with_capacity(homologs.len());

        for feature in homologs {
            let sequence = self.extract_feature(feature)?;
            debug!(
                "Extracted {} ({}:{}-{}{}), {} bp",
                feature.gene_name,
                feature.contig_id,
                feature.start,
                feature.end,
                feature.strand,
                sequence.len()
            );
            records.push(SequenceRecord::new(&feature.gene_name, sequence));
        }

        let records = match self.policy {
            DuplicateNamePolicy::Separate => records,
            DuplicateNamePolicy::Concatenate => merge_duplicate_names(records),
        };

        info!(
            "Extracted {} sequence records from {} homologs",
            records.len(),
            homologs.len()
        );

        Ok(records)
    }
}

///
/// Merge records sharing a name into a single record. Sequences are joined in
/// input order and each merged record sits where its name first appeared.
///
pub fn merge_duplicate_names(records: Vec<SequenceRecord>) -> Vec<SequenceRecord> {
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();
    let mut merged: Vec<SequenceRecord> = Vec::with_capacity(records.len());

    for record in records {
        match positions.get(&record.name) {
            Some(&idx) => merged[idx].sequence.push_str(&record.sequence),
            None => {
                positions.insert(record.name.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

///
/// Extract the sequences of `homologs` from `genome`.
///
/// # Arguments
/// - homologs: unique homolog features, in output order
/// - genome: the assembly the features are annotated on
/// - policy: what to do with homologs that share a gene name
pub fn extract_homologs(
    homologs: &[GenomicFeature],
    genome: &Genome,
    policy: DuplicateNamePolicy,
) -> Result<Vec<SequenceRecord>, ExtractError> {
    SequenceExtractor::new(genome)
        .with_policy(policy)
        .extract(homologs)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::InvalidBase;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn feature(contig: &str, start: u64, end: u64, name: &str, strand: Strand) -> GenomicFeature {
        GenomicFeature {
            contig_id: contig.to_string(),
            start,
            end,
            gene_name: name.to_string(),
            strand,
        }
    }

    #[fixture]
    fn genome() -> Genome {
        vec![
            ("chr1".to_string(), "ACGTACGTACGTACGTACGT"),
            ("chr2".to_string(), "aaaaccccggggttttNNNN"),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    fn test_plus_strand_is_verbatim(genome: Genome) {
        let extractor = SequenceExtractor::new(&genome);
        let sequence = extractor
            .extract_feature(&feature("chr1", 5, 10, "geneA", Strand::Plus))
            .unwrap();

        // 1-based positions 5 to 10
        assert_eq!(sequence, "ACGTAC");
        assert_eq!(sequence, &genome.get("chr1").unwrap()[4..10]);
    }

    #[rstest]
    fn test_minus_strand_is_reverse_complement(genome: Genome) {
        let extractor = SequenceExtractor::new(&genome);
        let sequence = extractor
            .extract_feature(&feature("chr2", 3, 10, "geneB", Strand::Minus))
            .unwrap();

        // AACCCCGG reversed and complemented
        assert_eq!(sequence, "CCGGGGTT");
    }

    #[rstest]
    fn test_whole_contig(genome: Genome) {
        let extractor = SequenceExtractor::new(&genome);
        let sequence = extractor
            .extract_feature(&feature("chr1", 1, 20, "all", Strand::Plus))
            .unwrap();
        assert_eq!(sequence, "ACGTACGTACGTACGTACGT");
    }

    #[rstest]
    fn test_missing_contig(genome: Genome) {
        let extractor = SequenceExtractor::new(&genome);
        let result = extractor.extract_feature(&feature("chr9", 1, 5, "geneX", Strand::Plus));
        assert_eq!(result, Err(ExtractError::MissingContig("chr9".to_string())));
    }

    #[rstest]
    #[case(0, 5)]
    #[case(8, 7)]
    #[case(15, 21)]
    fn test_out_of_bounds(genome: Genome, #[case] start: u64, #[case] end: u64) {
        let extractor = SequenceExtractor::new(&genome);
        let result = extractor.extract_feature(&feature("chr1", start, end, "geneX", Strand::Plus));
        assert!(matches!(result, Err(ExtractError::OutOfBounds { len: 20, .. })));
    }

    #[rstest]
    #[case(Strand::Plus)]
    #[case(Strand::Minus)]
    fn test_invalid_base_on_either_strand(genome: Genome, #[case] strand: Strand) {
        let extractor = SequenceExtractor::new(&genome);
        let result = extractor.extract_feature(&feature("chr2", 15, 18, "geneN", strand));
        assert_eq!(
            result,
            Err(ExtractError::InvalidBase {
                name: "geneN".to_string(),
                source: InvalidBase {
                    base: b'N',
                    position: 2
                },
            })
        );
    }

    #[rstest]
    #[case(1, 3, Strand::Plus, 0xC3, 2)]
    #[case(3, 4, Strand::Plus, 0xC3, 0)]
    #[case(4, 6, Strand::Plus, 0xA9, 0)]
    #[case(1, 6, Strand::Minus, 0xC3, 2)]
    fn test_non_ascii_base_is_invalid(
        #[case] start: u64,
        #[case] end: u64,
        #[case] strand: Strand,
        #[case] base: u8,
        #[case] position: usize,
    ) {
        // 'é' is two bytes, so the contig is 7 bytes long
        let genome: Genome = vec![("chr1".to_string(), "AAéAAA")].into_iter().collect();
        let extractor = SequenceExtractor::new(&genome);
        let result = extractor.extract_feature(&feature("chr1", start, end, "geneE", strand));

        assert_eq!(
            result,
            Err(ExtractError::InvalidBase {
                name: "geneE".to_string(),
                source: InvalidBase { base, position },
            })
        );
    }

    #[rstest]
    fn test_separate_keeps_duplicate_names(genome: Genome) {
        let homologs = vec![
            feature("chr1", 1, 4, "geneA", Strand::Plus),
            feature("chr2", 1, 4, "geneB", Strand::Plus),
            feature("chr2", 5, 8, "geneA", Strand::Minus),
        ];
        let records = extract_homologs(&homologs, &genome, DuplicateNamePolicy::Separate).unwrap();

        assert_eq!(
            records,
            vec![
                SequenceRecord::new("geneA", "ACGT".to_string()),
                SequenceRecord::new("geneB", "AAAA".to_string()),
                SequenceRecord::new("geneA", "GGGG".to_string()),
            ]
        );
    }

    #[rstest]
    fn test_concatenate_merges_duplicate_names(genome: Genome) {
        let homologs = vec![
            feature("chr1", 1, 4, "geneA", Strand::Plus),
            feature("chr2", 1, 4, "geneB", Strand::Plus),
            feature("chr2", 5, 8, "geneA", Strand::Minus),
        ];
        let records =
            extract_homologs(&homologs, &genome, DuplicateNamePolicy::Concatenate).unwrap();

        assert_eq!(
            records,
            vec![
                SequenceRecord::new("geneA", "ACGTGGGG".to_string()),
                SequenceRecord::new("geneB", "AAAA".to_string()),
            ]
        );
    }

    #[rstest]
    fn test_no_homologs(genome: Genome) {
        let records = extract_homologs(&[], &genome, DuplicateNamePolicy::Separate).unwrap();
        assert!(records.is_empty());
    }

    #[rstest]
    fn test_first_failure_aborts(genome: Genome) {
        let homologs = vec![
            feature("chr1", 1, 4, "geneA", Strand::Plus),
            feature("chrX", 1, 4, "geneB", Strand::Plus),
        ];
        let result = extract_homologs(&homologs, &genome, DuplicateNamePolicy::Separate);
        assert_eq!(result, Err(ExtractError::MissingContig("chrX".to_string())));
    }

    #[rstest]
    fn test_merge_duplicate_names_without_duplicates() {
        let records = vec![
            SequenceRecord::new("a", "A".to_string()),
            SequenceRecord::new("b", "C".to_string()),
        ];
        assert_eq!(merge_duplicate_names(records.clone()), records);
    }
}
