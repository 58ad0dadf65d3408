use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::{info, warn};

use homologs_core::models::{Genome, SequenceRecord};
use homologs_core::utils::get_dynamic_reader;

use crate::error::{ParseError, Result};

///
/// Read a FASTA assembly from an already opened reader.
///
/// A record starts at a `>` header; its identifier is the first whitespace
/// delimited word of the header. The lines up to the next header are trimmed
/// and joined into the record's sequence. When an identifier repeats, the
/// later record replaces the earlier one.
///
/// # Arguments
/// - reader: the file contents
/// - source: where the contents came from, used in error messages
pub fn read_genome_from<R: BufRead>(reader: R, source: &Path) -> Result<Genome> {
    let mut genome = Genome::new();

    let mut current_id: Option<String> = None;
    let mut sequence = String::new();

    let finish_record = |id: String, sequence: &str, genome: &mut Genome| {
        if genome.insert(id.clone(), sequence).is_some() {
            warn!(
                "Contig '{}' appears more than once in {}, keeping the last one",
                id,
                source.display()
            );
        }
    };

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;

        if let Some(header) = line.strip_prefix('>') {
            if let Some(id) = current_id.take() {
                finish_record(id, &sequence, &mut genome);
                sequence.clear();
            }

            let id = header.split_whitespace().next().ok_or_else(|| {
                ParseError::MalformedRecord {
                    path: source.to_owned(),
                    line: idx + 1,
                    reason: "header has no sequence identifier".to_string(),
                }
            })?;
            current_id = Some(id.to_string());
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if current_id.is_none() {
            return Err(ParseError::MalformedRecord {
                path: source.to_owned(),
                line: idx + 1,
                reason: "sequence data before the first '>' header".to_string(),
            });
        }
        sequence.push_str(trimmed);
    }

    if let Some(id) = current_id.take() {
        finish_record(id, &sequence, &mut genome);
    }

    info!("Read {} from {}", genome, source.display());

    Ok(genome)
}

///
/// Read a FASTA assembly from disk.
///
/// # Arguments
/// - path: path to the assembly, optionally gzipped
pub fn read_genome<P: AsRef<Path>>(path: P) -> Result<Genome> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path).map_err(|e| ParseError::FileRead {
        path: path.to_owned(),
        reason: format!("{:#}", e),
    })?;

    read_genome_from(reader, path)
}

pub trait FastaWrite {
    ///
    /// Write the records as FASTA to any writer
    ///
    /// # Arguments
    /// - writer: destination
    /// - line_width: wrap sequences after this many bases, `None` for one line
    fn write_fasta_to<W: Write>(&self, writer: W, line_width: Option<usize>) -> std::io::Result<()>;

    ///
    /// Write data to disk as fasta file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - line_width: wrap sequences after this many bases, `None` for one line
    fn write_fasta<T: AsRef<Path>>(&self, path: T, line_width: Option<usize>) -> std::io::Result<()>;

    ///
    /// Write data to disk as fasta.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - line_width: wrap sequences after this many bases, `None` for one line
    fn write_fasta_gz<T: AsRef<Path>>(&self, path: T, line_width: Option<usize>) -> std::io::Result<()>;
}

impl FastaWrite for [SequenceRecord] {
    fn write_fasta_to<W: Write>(&self, mut writer: W, line_width: Option<usize>) -> std::io::Result<()> {
        for record in self {
            writer.write_all(record.to_fasta(line_width).as_bytes())?;
        }
        writer.flush()
    }

    fn write_fasta<T: AsRef<Path>>(&self, path: T, line_width: Option<usize>) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_fasta_to(BufWriter::new(file), line_width)
    }

    fn write_fasta_gz<T: AsRef<Path>>(&self, path: T, line_width: Option<usize>) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        self.write_fasta_to(&mut encoder, line_width)?;

        encoder.finish()?.flush()
    }
}
