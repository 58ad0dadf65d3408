use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use homologs_core::config::{DEFAULT_MIN_COVERAGE, DEFAULT_MIN_IDENTITY, HomologsConfig};
use homologs_core::models::AlignmentHit;
use homologs_core::utils::{get_dynamic_reader, is_comment_line};

use crate::error::{ParseError, Result};

/// outfmt 6 with `qlen` appended
pub const BLAST_MIN_COLUMNS: usize = 13;

const QUERY_ID_COL: usize = 0;
const SUBJECT_ID_COL: usize = 1;
const IDENTITY_COL: usize = 2;
const LENGTH_COL: usize = 3;
const SUBJECT_START_COL: usize = 8;
const SUBJECT_END_COL: usize = 9;
const QUERY_LENGTH_COL: usize = 12;

///
/// Quality thresholds a hit has to pass to be considered a putative homolog.
///
/// Both comparisons are strict: a hit needs more than `min_identity` percent
/// identity and an alignment longer than `min_coverage` times its query.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitFilter {
    pub min_identity: f64,
    pub min_coverage: f64,
}

impl Default for HitFilter {
    fn default() -> Self {
        HitFilter {
            min_identity: DEFAULT_MIN_IDENTITY,
            min_coverage: DEFAULT_MIN_COVERAGE,
        }
    }
}

impl From<&HomologsConfig> for HitFilter {
    fn from(config: &HomologsConfig) -> Self {
        HitFilter {
            min_identity: config.min_identity(),
            min_coverage: config.min_coverage(),
        }
    }
}

impl HitFilter {
    pub fn accepts(&self, hit: &AlignmentHit) -> bool {
        hit.percent_identity > self.min_identity
            && hit.match_length as f64 > self.min_coverage * hit.query_length as f64
    }
}

fn parse_field<T: FromStr>(fields: &[&str], idx: usize, name: &str) -> std::result::Result<T, String> {
    fields[idx]
        .parse::<T>()
        .map_err(|_| format!("{} is not a number: '{}'", name, fields[idx]))
}

///
/// Parse one row of a tabular BLAST report. Columns are whitespace separated
/// and anything after the 13th column is ignored.
///
/// # Returns
/// The hit, or a description of what is wrong with the row
pub fn parse_hit_line(line: &str) -> std::result::Result<AlignmentHit, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < BLAST_MIN_COLUMNS {
        return Err(format!(
            "expected at least {} columns, found {}",
            BLAST_MIN_COLUMNS,
            fields.len()
        ));
    }

    Ok(AlignmentHit {
        query_id: fields[QUERY_ID_COL].to_string(),
        subject_id: fields[SUBJECT_ID_COL].to_string(),
        percent_identity: parse_field(&fields, IDENTITY_COL, "percent identity")?,
        match_length: parse_field(&fields, LENGTH_COL, "alignment length")?,
        start: parse_field(&fields, SUBJECT_START_COL, "subject start")?,
        end: parse_field(&fields, SUBJECT_END_COL, "subject end")?,
        query_length: parse_field(&fields, QUERY_LENGTH_COL, "query length")?,
    })
}

///
/// Read the hits passing `filter` from an already opened report.
///
/// # Arguments
/// - reader: the report contents
/// - source: where the contents came from, used in error messages
/// - filter: quality thresholds
pub fn read_hits_from<R: BufRead>(
    reader: R,
    source: &Path,
    filter: &HitFilter,
) -> Result<Vec<AlignmentHit>> {
    let mut hits: Vec<AlignmentHit> = Vec::new();
    let mut total: usize = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if is_comment_line(&line) {
            continue;
        }

        let hit = parse_hit_line(&line).map_err(|reason| ParseError::MalformedRecord {
            path: source.to_owned(),
            line: idx + 1,
            reason,
        })?;
        total += 1;

        if filter.accepts(&hit) {
            hits.push(hit);
        } else {
            debug!(
                "Dropping hit {} -> {}:{}-{} ({:.1}% identity, {} of {} bp)",
                hit.query_id,
                hit.subject_id,
                hit.start,
                hit.end,
                hit.percent_identity,
                hit.match_length,
                hit.query_length
            );
        }
    }

    info!(
        "Kept {} of {} hits from {}",
        hits.len(),
        total,
        source.display()
    );

    Ok(hits)
}

///
/// Read the hits passing `filter` from a tabular BLAST report on disk.
///
/// # Arguments
/// - path: path to the report, optionally gzipped
/// - filter: quality thresholds
pub fn read_hits<P: AsRef<Path>>(path: P, filter: &HitFilter) -> Result<Vec<AlignmentHit>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path).map_err(|e| ParseError::FileRead {
        path: path.to_owned(),
        reason: format!("{:#}", e),
    })?;

    read_hits_from(reader, path, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/homologs")
            .join(file_name)
    }

    #[rstest]
    fn test_parse_hit_line() {
        let hit = parse_hit_line("q2\tcontig1\t88.000\t14\t0\t0\t1\t14\t40\t27\t1e-10\t50.0\t15")
            .unwrap();

        assert_eq!(hit.query_id, "q2");
        assert_eq!(hit.subject_id, "contig1");
        assert_eq!(hit.percent_identity, 88.0);
        assert_eq!(hit.match_length, 14);
        // reversed coordinates are kept as reported
        assert_eq!(hit.start, 40);
        assert_eq!(hit.end, 27);
        assert_eq!(hit.query_length, 15);
    }

    #[rstest]
    fn test_parse_hit_line_ignores_extra_columns() {
        let hit = parse_hit_line("q1 contig1 95.0 15 0 0 1 15 3 18 1e-10 50.0 16 extra stuff");
        assert!(hit.is_ok());
    }

    #[rstest]
    #[case("q1\tcontig1\t95.0\t15\t0\t0\t1\t15\t3\t18\t1e-10\t50.0", "expected at least 13 columns, found 12")]
    #[case("q1\tcontig1\thigh\t15\t0\t0\t1\t15\t3\t18\t1e-10\t50.0\t16", "percent identity is not a number: 'high'")]
    #[case("q1\tcontig1\t95.0\t15\t0\t0\t1\t15\t-3\t18\t1e-10\t50.0\t16", "subject start is not a number: '-3'")]
    #[case("q1\tcontig1\t95.0\t15\t0\t0\t1\t15\t3\t18\t1e-10\t50.0\t16.5", "query length is not a number: '16.5'")]
    fn test_parse_hit_line_malformed(#[case] line: &str, #[case] reason: &str) {
        assert_eq!(parse_hit_line(line), Err(reason.to_string()));
    }

    #[rstest]
    #[case(30.0, 15, 16, false)]
    #[case(30.5, 15, 16, true)]
    #[case(95.0, 9, 10, false)]
    #[case(95.0, 10, 10, true)]
    #[case(95.0, 0, 0, false)]
    fn test_filter_thresholds_are_strict(
        #[case] identity: f64,
        #[case] length: u64,
        #[case] query_length: u64,
        #[case] expected: bool,
    ) {
        let mut hit = AlignmentHit::new("chr1", 1, 10);
        hit.percent_identity = identity;
        hit.match_length = length;
        hit.query_length = query_length;

        assert_eq!(HitFilter::default().accepts(&hit), expected);
    }

    #[rstest]
    fn test_read_hits() {
        let hits = read_hits(get_test_path("hits.tsv"), &HitFilter::default()).unwrap();

        let queries: Vec<&str> = hits.iter().map(|h| h.query_id.as_str()).collect();
        assert_eq!(queries, vec!["q1", "q2", "q5", "q6", "q7", "q8", "q9"]);
    }

    #[rstest]
    fn test_read_hits_gz() {
        let plain = read_hits(get_test_path("hits.tsv"), &HitFilter::default()).unwrap();
        let gzipped = read_hits(get_test_path("hits.tsv.gz"), &HitFilter::default()).unwrap();
        assert_eq!(plain, gzipped);
    }

    #[rstest]
    fn test_read_hits_custom_filter() {
        let filter = HitFilter {
            min_identity: 90.0,
            min_coverage: 0.9,
        };
        let hits = read_hits(get_test_path("hits.tsv"), &filter).unwrap();

        let queries: Vec<&str> = hits.iter().map(|h| h.query_id.as_str()).collect();
        assert_eq!(queries, vec!["q1", "q5", "q7", "q8", "q9"]);
    }

    #[rstest]
    fn test_read_hits_skips_comments() {
        let hits = read_hits(get_test_path("hits_outfmt7.tsv"), &HitFilter::default()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject_id, "contig1");
    }

    #[rstest]
    fn test_read_hits_empty() {
        let hits = read_hits(get_test_path("hits_empty.tsv"), &HitFilter::default()).unwrap();
        assert!(hits.is_empty());
    }

    #[rstest]
    fn test_short_row_reports_line() {
        let result = read_hits(get_test_path("hits_short_row.tsv"), &HitFilter::default());
        match result {
            Err(ParseError::MalformedRecord { line, reason, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(reason, "expected at least 13 columns, found 12");
            }
            other => panic!("expected a malformed record, got {:?}", other),
        }
    }

    #[rstest]
    fn test_non_numeric_row() {
        let result = read_hits(get_test_path("hits_non_numeric.tsv"), &HitFilter::default());
        assert!(matches!(
            result,
            Err(ParseError::MalformedRecord { line: 1, .. })
        ));
    }

    #[rstest]
    fn test_failing_rows_are_still_validated() {
        // a row that would be filtered out must still parse
        let report = "q1 contig1 10.0 15 0 0 1 15 3 18 1e-10 50.0 16\nq2 contig1 10.0 x\n";
        let result = read_hits_from(
            Cursor::new(report),
            Path::new("inline.tsv"),
            &HitFilter::default(),
        );
        assert!(matches!(
            result,
            Err(ParseError::MalformedRecord { line: 2, .. })
        ));
    }

    #[rstest]
    fn test_query_ids_resembling_bed_headers_are_hits() {
        let report = "trackA contig1 95.0 15 0 0 1 15 3 18 1e-10 50.0 16\n\
                      browser_q contig1 95.0 15 0 0 1 15 3 18 1e-10 50.0 16\n\
                      track contig2 95.0 15 0 0 1 15 3 18 1e-10 50.0 16\n";
        let hits = read_hits_from(
            Cursor::new(report),
            Path::new("inline.tsv"),
            &HitFilter::default(),
        )
        .unwrap();

        let queries: Vec<&str> = hits.iter().map(|h| h.query_id.as_str()).collect();
        assert_eq!(queries, vec!["trackA", "browser_q", "track"]);
    }

    #[rstest]
    fn test_missing_file() {
        let result = read_hits(get_test_path("nope.tsv"), &HitFilter::default());
        assert!(matches!(result, Err(ParseError::FileRead { .. })));
    }
}
