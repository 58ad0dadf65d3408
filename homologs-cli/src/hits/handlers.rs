use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use homologs_core::models::AlignmentHit;
use homologs_core::utils::get_dynamic_reader_w_stdin;
use homologs_io::{HitFilter, read_hits_from};

use crate::config::settings_from_matches;

pub fn run_hits(matches: &ArgMatches) -> Result<()> {
    let blast_file = matches
        .get_one::<String>("blast")
        .expect("A path to a BLAST report is required.");

    let config = settings_from_matches(matches)?;
    let filter = HitFilter::from(&config);

    let reader = get_dynamic_reader_w_stdin(blast_file)?;
    let hits = read_hits_from(reader, Path::new(blast_file), &filter)
        .with_context(|| format!("Failed to load hits from {}", blast_file))?;

    let stdout = io::stdout();
    write_hits(&hits, BufWriter::new(stdout.lock()))?;

    Ok(())
}

/// One tab separated line per hit, the query id first.
fn write_hits<W: Write>(hits: &[AlignmentHit], mut writer: W) -> io::Result<()> {
    for hit in hits {
        writeln!(writer, "{}\t{}", hit.query_id, hit.as_string())?;
    }
    writer.flush()
}
