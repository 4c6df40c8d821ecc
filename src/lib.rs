//! Core library entry for the `roster` CLI.
//!
//! Builds an ordered collection of [`record::Record`] values, each labelled
//! with a fixed prefix and a per-run counter, and prints it.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod logging;
pub mod ports;
pub mod record;
pub mod report;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and count as success.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| format!("Failed to write output: {e}"));
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(cli.command.as_ref())
}
