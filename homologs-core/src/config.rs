use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MIN_IDENTITY: f64 = 30.0;
pub const DEFAULT_MIN_COVERAGE: f64 = 0.9;

/// What to do with homologs that share a gene name.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateNamePolicy {
    /// One record per homolog, names may repeat.
    #[default]
    Separate,
    /// One record per name, sequences joined in homolog order.
    Concatenate,
}

impl FromStr for DuplicateNamePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "separate" => Ok(DuplicateNamePolicy::Separate),
            "concatenate" => Ok(DuplicateNamePolicy::Concatenate),
            _ => Err(ConfigError::InvalidValue {
                key: "duplicate_names",
                reason: format!("'{}' is not one of 'separate' or 'concatenate'", s),
            }),
        }
    }
}

impl Display for DuplicateNamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateNamePolicy::Separate => write!(f, "separate"),
            DuplicateNamePolicy::Concatenate => write!(f, "concatenate"),
        }
    }
}

///
/// Run settings, as read from a TOML file. Every key is optional.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct HomologsConfig {
    pub min_identity: Option<f64>,
    pub min_coverage: Option<f64>,
    pub duplicate_names: Option<DuplicateNamePolicy>,
    pub line_width: Option<usize>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl HomologsConfig {
    pub fn min_identity(&self) -> f64 {
        self.min_identity.unwrap_or(DEFAULT_MIN_IDENTITY)
    }

    pub fn min_coverage(&self) -> f64 {
        self.min_coverage.unwrap_or(DEFAULT_MIN_COVERAGE)
    }

    pub fn duplicate_names(&self) -> DuplicateNamePolicy {
        self.duplicate_names.unwrap_or_default()
    }

    ///
    /// Check value ranges that the TOML types alone can't express.
    ///
    pub fn validate(&self) -> ConfigResult<()> {
        let identity = self.min_identity();
        if !(0.0..=100.0).contains(&identity) {
            return Err(ConfigError::InvalidValue {
                key: "min_identity",
                reason: format!("{} is outside [0, 100]", identity),
            });
        }

        let coverage = self.min_coverage();
        if !(0.0..=1.0).contains(&coverage) {
            return Err(ConfigError::InvalidValue {
                key: "min_coverage",
                reason: format!("{} is outside [0, 1]", coverage),
            });
        }

        if self.line_width == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "line_width",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

impl TryFrom<&Path> for HomologsConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: HomologsConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
