use clap::{Command, arg};

use crate::config::settings_args;

pub const HITS_CMD: &str = "hits";

pub fn create_hits_cli() -> Command {
    Command::new(HITS_CMD)
        .about("Print the BLAST hits that pass the identity and coverage filters")
        .arg_required_else_help(true)
        .arg(arg!(<blast> "Tabular BLAST report (outfmt 6 plus qlen as the 13th column), - for stdin"))
        .args(settings_args())
}
