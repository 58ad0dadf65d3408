mod config;
mod find;
mod hits;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "homologs";
    pub const VERBOSE_ARG: &str = "verbose";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Find the annotated genes that contain BLAST hits and extract their sequences.")
        .subcommand_required(true)
        .arg(
            Arg::new(consts::VERBOSE_ARG)
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("More log output (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence"),
        )
        .subcommand(find::cli::create_find_cli())
        .subcommand(hits::cli::create_hits_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count(consts::VERBOSE_ARG));

    match matches.subcommand() {
        //
        // FIND HOMOLOGS
        //
        Some((find::cli::FIND_CMD, matches)) => {
            find::handlers::run_find(matches)?;
        }

        //
        // INSPECT FILTERED HITS
        //
        Some((hits::cli::HITS_CMD, matches)) => {
            hits::handlers::run_hits(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
