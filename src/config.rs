//! Run settings resolved from defaults, environment, and CLI flags.
//!
//! Precedence, lowest first: built-in defaults, `ROSTER_*` environment
//! variables (a `.env` file is loaded if present), explicit CLI flags.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::RosterError;
use crate::factory::DEFAULT_COUNT;
use crate::record::DEFAULT_PREFIX;

/// Environment variable overriding the record count.
pub const ENV_COUNT: &str = "ROSTER_COUNT";
/// Environment variable overriding the label prefix.
pub const ENV_PREFIX: &str = "ROSTER_PREFIX";
/// Environment variable overriding the output format.
pub const ENV_FORMAT: &str = "ROSTER_FORMAT";
/// Name reported when the `--count` flag is rejected.
pub const FLAG_COUNT: &str = "--count";

/// Largest accepted record count, from either the environment or `--count`.
pub const MAX_COUNT: usize = 10_000_000;

/// How the collection is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single-line debug representation.
    #[default]
    Debug,
    /// Multi-line debug representation.
    Pretty,
    /// JSON roster document.
    Json,
    /// YAML roster document.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "debug",
            Self::Pretty => "pretty",
            Self::Json => "json",
            Self::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Number of records to build.
    pub count: usize,
    /// Label prefix.
    pub prefix: String,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            prefix: DEFAULT_PREFIX.to_string(),
            format: OutputFormat::Debug,
        }
    }
}

/// Flag values given on the command line; `None` means not given.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--count`
    pub count: Option<usize>,
    /// `--prefix`
    pub prefix: Option<String>,
    /// `--format`
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Loads `.env` if present, then resolves settings from the process
    /// environment and the given overrides.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidSetting`] if an environment value cannot be parsed
    /// or a count exceeds [`MAX_COUNT`].
    pub fn load(overrides: &Overrides) -> Result<Self, RosterError> {
        // Variables already set in the process win over .env entries.
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::resolve(|key| std::env::var(key).ok(), overrides)
    }

    /// Resolves settings from a variable lookup and the given overrides.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidSetting`] if a looked-up value cannot be parsed
    /// or a count exceeds [`MAX_COUNT`].
    pub fn resolve<F>(lookup: F, overrides: &Overrides) -> Result<Self, RosterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_COUNT) {
            let count = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                RosterError::InvalidSetting {
                    key: ENV_COUNT.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            settings.count = check_count(ENV_COUNT, count)?;
        }
        if let Some(raw) = lookup(ENV_PREFIX) {
            settings.prefix = raw;
        }
        if let Some(raw) = lookup(ENV_FORMAT) {
            settings.format =
                raw.trim()
                    .parse()
                    .map_err(|reason| RosterError::InvalidSetting {
                        key: ENV_FORMAT.to_string(),
                        value: raw.clone(),
                        reason,
                    })?;
        }

        if let Some(count) = overrides.count {
            settings.count = check_count(FLAG_COUNT, count)?;
        }
        if let Some(prefix) = &overrides.prefix {
            settings.prefix.clone_from(prefix);
        }
        if let Some(format) = overrides.format {
            settings.format = format;
        }

        Ok(settings)
    }
}

fn check_count(key: &str, count: usize) -> Result<usize, RosterError> {
    if count > MAX_COUNT {
        return Err(RosterError::InvalidSetting {
            key: key.to_string(),
            value: count.to_string(),
            reason: format!("must be at most {MAX_COUNT}"),
        });
    }
    Ok(count)
}
