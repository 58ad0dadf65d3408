use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, value_parser};
use log::debug;

use homologs_core::config::HomologsConfig;

pub const CONFIG_ARG: &str = "config";
pub const MIN_IDENTITY_ARG: &str = "min-identity";
pub const MIN_COVERAGE_ARG: &str = "min-coverage";

///
/// Arguments shared by every subcommand that filters hits.
///
pub fn settings_args() -> Vec<Arg> {
    vec![
        Arg::new(CONFIG_ARG)
            .short('c')
            .long(CONFIG_ARG)
            .value_name("TOML")
            .help("Settings file. Flags given on the command line take precedence"),
        Arg::new(MIN_IDENTITY_ARG)
            .long(MIN_IDENTITY_ARG)
            .value_name("PERCENT")
            .value_parser(value_parser!(f64))
            .help("Keep hits with percent identity strictly above this [default: 30]"),
        Arg::new(MIN_COVERAGE_ARG)
            .long(MIN_COVERAGE_ARG)
            .value_name("FRACTION")
            .value_parser(value_parser!(f64))
            .help("Keep hits longer than this fraction of their query [default: 0.9]"),
    ]
}

///
/// Load settings from `--config` (if any) and lay the threshold flags over them.
///
pub fn settings_from_matches(matches: &ArgMatches) -> Result<HomologsConfig> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG) {
        Some(path) => HomologsConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => HomologsConfig::default(),
    };

    if let Some(identity) = matches.get_one::<f64>(MIN_IDENTITY_ARG) {
        config.min_identity = Some(*identity);
    }
    if let Some(coverage) = matches.get_one::<f64>(MIN_COVERAGE_ARG) {
        config.min_coverage = Some(*coverage);
    }

    config.validate()?;
    debug!("Effective settings: {:?}", config);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Command;
    use homologs_core::config::DuplicateNamePolicy;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn parse(args: &[&str]) -> ArgMatches {
        Command::new("test")
            .args(settings_args())
            .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap()
    }

    #[rstest]
    fn test_no_flags_gives_defaults() {
        let config = settings_from_matches(&parse(&[])).unwrap();
        assert_eq!(config, HomologsConfig::default());
    }

    #[rstest]
    fn test_flags_override_file() {
        let matches = parse(&[
            "--config",
            "../tests/data/homologs/config.toml",
            "--min-identity",
            "95.5",
        ]);
        let config = settings_from_matches(&matches).unwrap();

        assert_eq!(config.min_identity(), 95.5);
        assert_eq!(config.min_coverage(), 0.9);
        assert_eq!(config.duplicate_names(), DuplicateNamePolicy::Concatenate);
        assert_eq!(config.line_width, Some(10));
    }

    #[rstest]
    #[case(&["--min-coverage", "2"])]
    #[case(&["--min-identity=-1"])]
    #[case(&["--config", "../tests/data/homologs/config_bad_coverage.toml"])]
    #[case(&["--config", "../tests/data/homologs/config_unknown_key.toml"])]
    #[case(&["--config", "../tests/data/homologs/missing.toml"])]
    fn test_rejected_settings(#[case] args: &[&str]) {
        assert!(settings_from_matches(&parse(args)).is_err());
    }
}
