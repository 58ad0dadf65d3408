use std::fmt::{self, Display};

///
/// AlignmentHit struct, one row of a tabular BLAST report
///
/// `start` and `end` are the subject coordinates exactly as reported. BLAST
/// swaps them for hits on the minus strand, so `start <= end` does not hold
/// in general and nothing downstream re-orders them.
///
#[derive(PartialEq, Debug, Clone)]
pub struct AlignmentHit {
    pub query_id: String,
    pub subject_id: String,
    pub percent_identity: f64,
    pub match_length: u64,
    pub start: u64,
    pub end: u64,
    pub query_length: u64,
}

impl AlignmentHit {
    ///
    /// Build a hit from its subject coordinates only. Alignment metrics are
    /// left at zero.
    ///
    pub fn new(subject_id: &str, start: u64, end: u64) -> Self {
        AlignmentHit {
            query_id: String::new(),
            subject_id: subject_id.to_string(),
            percent_identity: 0.0,
            match_length: 0,
            start,
            end,
            query_length: 0,
        }
    }

    ///
    /// Get the tab separated summary line of the hit
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{:.3}\t{}\t{}",
            self.subject_id,
            self.start,
            self.end,
            self.percent_identity,
            self.match_length,
            self.query_length,
        )
    }
}

impl Display for AlignmentHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
