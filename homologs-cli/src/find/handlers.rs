use std::fs::remove_file;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use homologs_core::config::{DuplicateNamePolicy, HomologsConfig};
use homologs_core::models::{GenomicFeature, SequenceRecord};
use homologs_io::{BedWrite, FastaWrite, HitFilter, read_features, read_genome, read_hits};
use homologs_overlaprs::HomologResolver;
use homologs_seq::extract_homologs;

use super::cli::{DUPLICATE_NAMES_ARG, HOMOLOGS_BED_ARG, LINE_WIDTH_ARG};
use crate::config::settings_from_matches;

pub fn run_find(matches: &ArgMatches) -> Result<()> {
    let blast_file = matches
        .get_one::<String>("blast")
        .expect("A path to a BLAST report is required.");

    let bed_file = matches
        .get_one::<String>("bed")
        .expect("A path to a feature file is required.");

    let assembly_file = matches
        .get_one::<String>("assembly")
        .expect("A path to a genome assembly is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let homologs_bed = matches.get_one::<String>(HOMOLOGS_BED_ARG);

    let mut config = settings_from_matches(matches)?;
    if let Some(policy) = matches.get_one::<String>(DUPLICATE_NAMES_ARG) {
        config.duplicate_names = Some(policy.parse::<DuplicateNamePolicy>()?);
    }
    if let Some(width) = matches.get_one::<usize>(LINE_WIDTH_ARG) {
        config.line_width = Some(*width);
    }
    config.validate()?;

    let found = find_homologs(
        blast_file,
        bed_file,
        assembly_file,
        output,
        homologs_bed.map(|s| s.as_str()),
        &config,
    )?;

    // with `-` stdout carries the FASTA records
    if writes_to_stdout(output) {
        eprintln!("Found {} unique homologs", found);
    } else {
        println!("Found {} unique homologs", found);
    }

    Ok(())
}

///
/// Run the whole pipeline: load and filter hits, resolve them against the
/// features, pull the homolog sequences out of the assembly and write them.
///
/// Nothing is written unless every homolog could be extracted, and a failed
/// write leaves neither output behind.
///
/// # Returns
/// The number of unique homologs
pub fn find_homologs(
    blast_file: &str,
    bed_file: &str,
    assembly_file: &str,
    output: &str,
    homologs_bed: Option<&str>,
    config: &HomologsConfig,
) -> Result<usize> {
    let filter = HitFilter::from(config);
    let hits = read_hits(blast_file, &filter)
        .with_context(|| format!("Failed to load hits from {}", blast_file))?;

    let features = read_features(bed_file)
        .with_context(|| format!("Failed to load features from {}", bed_file))?;

    let homologs = HomologResolver::build(features).resolve(&hits);

    let genome = read_genome(assembly_file)
        .with_context(|| format!("Failed to load assembly from {}", assembly_file))?;
    info!("{}", genome);

    let records = extract_homologs(&homologs, &genome, config.duplicate_names())
        .context("Failed to extract homolog sequences")?;

    if let Some(bed_out) = homologs_bed {
        write_features(&homologs, bed_out)
            .inspect_err(|_| discard(bed_out))
            .with_context(|| format!("Failed to write homolog features to {}", bed_out))?;
    }

    write_records(&records, output, config.line_width)
        .inspect_err(|_| {
            if !writes_to_stdout(output) {
                discard(output);
            }
            if let Some(bed_out) = homologs_bed {
                discard(bed_out);
            }
        })
        .with_context(|| format!("Failed to write homologs to {}", output))?;

    Ok(homologs.len())
}

fn writes_to_stdout(output: &str) -> bool {
    output == "-"
}

/// Remove an output left behind by a failed run.
fn discard(path: &str) {
    match remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => {
            warn!("Could not remove incomplete output {}: {}", path, e);
        }
        _ => {}
    }
}

fn write_records(records: &[SequenceRecord], output: &str, line_width: Option<usize>) -> io::Result<()> {
    if writes_to_stdout(output) {
        let stdout = io::stdout();
        records.write_fasta_to(BufWriter::new(stdout.lock()), line_width)
    } else if output.ends_with(".gz") {
        records.write_fasta_gz(output, line_width)
    } else {
        records.write_fasta(output, line_width)
    }
}

fn write_features(features: &[GenomicFeature], output: &str) -> io::Result<()> {
    if output.ends_with(".gz") {
        features.write_bed_gz(output)
    } else {
        features.write_bed(output)
    }
}
