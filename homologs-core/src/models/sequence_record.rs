use std::fmt::{self, Display};

///
/// SequenceRecord struct, one named sequence of the output file
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(name: &str, sequence: String) -> Self {
        SequenceRecord {
            name: name.to_string(),
            sequence,
        }
    }

    ///
    /// Render the record as FASTA text.
    ///
    /// # Arguments
    /// - line_width: wrap the sequence after this many bases, or keep it on a
    ///   single line when `None`
    pub fn to_fasta(&self, line_width: Option<usize>) -> String {
        let mut out = String::with_capacity(self.name.len() + self.sequence.len() + 8);
        out.push('>');
        out.push_str(&self.name);
        out.push('\n');

        match line_width {
            Some(width) if width > 0 => {
                for chunk in self.sequence.as_bytes().chunks(width) {
                    // sequences are ASCII
                    out.push_str(&String::from_utf8_lossy(chunk));
                    out.push('\n');
                }
            }
            _ if !self.sequence.is_empty() => {
                out.push_str(&self.sequence);
                out.push('\n');
            }
            _ => {}
        }
        out
    }
}

impl Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fasta(None))
    }
}
