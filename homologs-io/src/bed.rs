use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::info;

use homologs_core::models::{GenomicFeature, Strand};
use homologs_core::utils::{get_dynamic_reader, is_bed_header_line};

use crate::error::{ParseError, Result};

pub const BED_MIN_COLUMNS: usize = 6;

///
/// Parse one row of a BED-like feature file: contig, start, end, gene name,
/// score and strand. The score is not kept and trailing columns are ignored.
///
/// # Returns
/// The feature, or a description of what is wrong with the row
pub fn parse_feature_line(line: &str) -> std::result::Result<GenomicFeature, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < BED_MIN_COLUMNS {
        return Err(format!(
            "expected at least {} columns, found {}",
            BED_MIN_COLUMNS,
            fields.len()
        ));
    }

    let start = fields[1]
        .parse::<u64>()
        .map_err(|_| format!("start is not a number: '{}'", fields[1]))?;
    let end = fields[2]
        .parse::<u64>()
        .map_err(|_| format!("end is not a number: '{}'", fields[2]))?;
    let strand = fields[5]
        .parse::<Strand>()
        .map_err(|e| e.to_string())?;

    Ok(GenomicFeature {
        contig_id: fields[0].to_string(),
        start,
        end,
        gene_name: fields[3].to_string(),
        strand,
    })
}

///
/// Read features from an already opened BED-like file, in file order.
///
/// # Arguments
/// - reader: the file contents
/// - source: where the contents came from, used in error messages
pub fn read_features_from<R: BufRead>(reader: R, source: &Path) -> Result<Vec<GenomicFeature>> {
    let mut features: Vec<GenomicFeature> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if is_bed_header_line(&line) {
            continue;
        }

        let feature = parse_feature_line(&line).map_err(|reason| ParseError::MalformedRecord {
            path: source.to_owned(),
            line: idx + 1,
            reason,
        })?;
        features.push(feature);
    }

    info!("Read {} features from {}", features.len(), source.display());

    Ok(features)
}

///
/// Read features from a BED-like file on disk, in file order.
///
/// # Arguments
/// - path: path to the file, optionally gzipped
pub fn read_features<P: AsRef<Path>>(path: P) -> Result<Vec<GenomicFeature>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path).map_err(|e| ParseError::FileRead {
        path: path.to_owned(),
        reason: format!("{:#}", e),
    })?;

    read_features_from(reader, path)
}

pub trait BedWrite {
    ///
    /// Write data to disk as bed file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write data to disk as bed.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

impl BedWrite for [GenomicFeature] {
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(path)?);

        for feature in self {
            writeln!(file, "{}", feature.as_string())?;
        }
        file.flush()
    }

    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());

        for feature in self {
            writeln!(encoder, "{}", feature.as_string())?;
        }

        encoder.finish()?.flush()
    }
}
