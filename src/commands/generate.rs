//! `roster generate` command.

use tracing::info;

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::factory;
use crate::report;

/// Execute the `generate` command.
///
/// Builds the collection, then writes it to stdout once the loop completes.
///
/// # Errors
///
/// Returns an error string if rendering fails.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<(), String> {
    let records = factory::collect(settings.count, &settings.prefix);
    let output = report::render(ctx, records, settings.format).map_err(|e| e.to_string())?;
    println!("{output}");
    info!(count = settings.count, format = %settings.format, "roster written");
    Ok(())
}
