use std::fmt::{self, Display};

use fxhash::FxHashMap;

///
/// Genome struct, the contigs of an assembly keyed by their identifier
///
/// Sequences are stored uppercased regardless of the case they were read in.
///
#[derive(Clone, Debug, Default)]
pub struct Genome {
    contigs: FxHashMap<String, String>,
}

impl Genome {
    pub fn new() -> Self {
        Genome::default()
    }

    ///
    /// Add a contig, replacing any previous contig with the same identifier.
    ///
    /// # Returns
    /// The replaced sequence, if there was one
    pub fn insert(&mut self, contig_id: String, sequence: &str) -> Option<String> {
        self.contigs
            .insert(contig_id, sequence.to_ascii_uppercase())
    }

    pub fn get(&self, contig_id: &str) -> Option<&str> {
        self.contigs.get(contig_id).map(String::as_str)
    }

    pub fn contains(&self, contig_id: &str) -> bool {
        self.contigs.contains_key(contig_id)
    }

    pub fn contig_length(&self, contig_id: &str) -> Option<usize> {
        self.contigs.get(contig_id).map(String::len)
    }

    ///
    /// Iterate contig identifiers in no particular order
    ///
    pub fn iter_contigs(&self) -> impl Iterator<Item = &String> {
        self.contigs.keys()
    }

    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    ///
    /// Total number of bases over all contigs
    ///
    pub fn nucleotides_length(&self) -> usize {
        self.contigs.values().map(String::len).sum()
    }
}

impl<S: AsRef<str>> FromIterator<(String, S)> for Genome {
    fn from_iter<T: IntoIterator<Item = (String, S)>>(iter: T) -> Self {
        let mut genome = Genome::new();
        for (contig_id, sequence) in iter {
            genome.insert(contig_id, sequence.as_ref());
        }
        genome
    }
}

impl Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Genome with {} contigs ({} bp).",
            self.len(),
            self.nucleotides_length()
        )
    }
}
