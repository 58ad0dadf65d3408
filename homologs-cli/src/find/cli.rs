use clap::{Arg, Command, arg, value_parser};

use crate::config::settings_args;

pub const FIND_CMD: &str = "find";

pub const DUPLICATE_NAMES_ARG: &str = "duplicate-names";
pub const LINE_WIDTH_ARG: &str = "line-width";
pub const HOMOLOGS_BED_ARG: &str = "homologs-bed";

pub fn create_find_cli() -> Command {
    Command::new(FIND_CMD)
        .about("Find the annotated genes that contain a BLAST hit and write their sequences as FASTA")
        .arg_required_else_help(true)
        .arg(arg!(<blast> "Tabular BLAST report (outfmt 6 plus qlen as the 13th column)"))
        .arg(arg!(<bed> "Feature file: contig, start, end, name, score, strand"))
        .arg(arg!(<assembly> "Genome assembly (FASTA)"))
        .arg(arg!(<output> "Where to write the homolog sequences. Use .gz to compress, - for stdout"))
        .args(settings_args())
        .arg(
            Arg::new(DUPLICATE_NAMES_ARG)
                .long(DUPLICATE_NAMES_ARG)
                .value_name("POLICY")
                .value_parser(["separate", "concatenate"])
                .help("Homologs sharing a gene name get separate records or one joined record [default: separate]"),
        )
        .arg(
            Arg::new(LINE_WIDTH_ARG)
                .long(LINE_WIDTH_ARG)
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Wrap sequences after N bases. Unwrapped when omitted"),
        )
        .arg(
            Arg::new(HOMOLOGS_BED_ARG)
                .long(HOMOLOGS_BED_ARG)
                .value_name("PATH")
                .help("Also write the homolog features as BED (.gz to compress)"),
        )
}
