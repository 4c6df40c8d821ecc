//! `roster verify` command.

use std::collections::HashSet;

use tracing::info;

use crate::config::Settings;
use crate::error::RosterError;
use crate::factory;
use crate::record::{label, Record};

/// Execute the `verify` command.
///
/// # Errors
///
/// Returns an error string if the rebuilt collection breaks an invariant.
pub fn run(settings: &Settings) -> Result<(), String> {
    let records = factory::collect(settings.count, &settings.prefix);
    check(&records, settings.count, &settings.prefix).map_err(|e| e.to_string())?;
    match (records.first(), records.last()) {
        (Some(first), Some(last)) => println!(
            "ok: {} records, labels {} .. {}",
            records.len(),
            first.name(),
            last.name()
        ),
        _ => println!("ok: 0 records"),
    }
    info!(count = records.len(), "labels verified");
    Ok(())
}

/// Checks length, label uniqueness, and per-index labels, in that order.
///
/// # Errors
///
/// Returns [`RosterError::Invariant`] describing the first violation found.
pub fn check(records: &[Record], count: usize, prefix: &str) -> Result<(), RosterError> {
    if records.len() != count {
        return Err(RosterError::Invariant(format!(
            "expected {count} records, found {}",
            records.len()
        )));
    }
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.name()) {
            return Err(RosterError::Invariant(format!(
                "duplicate label '{}'",
                record.name()
            )));
        }
    }
    for (i, record) in (0u64..).zip(records) {
        let expected = label(prefix, i);
        if record.name() != expected {
            return Err(RosterError::Invariant(format!(
                "record {i} is labelled '{}', expected '{expected}'",
                record.name()
            )));
        }
    }
    Ok(())
}
