//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::config::{OutputFormat, Overrides};

/// Top-level CLI parser for `roster`.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Build a labelled collection of records")]
pub struct Cli {
    /// The command to execute; defaults to `generate`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the collection and print it.
    Generate {
        /// Collection flags.
        #[command(flatten)]
        build: BuildArgs,
        /// Output format [env: ROSTER_FORMAT].
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Build the collection and check its labels.
    Verify {
        /// Collection flags.
        #[command(flatten)]
        build: BuildArgs,
    },
}

/// Flags shared by every command that builds a collection.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Number of records to build [env: ROSTER_COUNT].
    #[arg(long)]
    pub count: Option<usize>,
    /// Label prefix [env: ROSTER_PREFIX].
    #[arg(long)]
    pub prefix: Option<String>,
}

impl Command {
    /// Flag overrides carried by this command.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        match self {
            Self::Generate { build, format } => Overrides {
                count: build.count,
                prefix: build.prefix.clone(),
                format: *format,
            },
            Self::Verify { build } => Overrides {
                count: build.count,
                prefix: build.prefix.clone(),
                format: None,
            },
        }
    }
}
