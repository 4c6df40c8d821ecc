//! Command dispatch and handlers.

pub mod generate;
pub mod verify;

use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler. `None` runs `generate` with
/// no flag overrides.
///
/// # Errors
///
/// Returns an error string if settings cannot be resolved or the handler fails.
pub fn dispatch(command: Option<&Command>) -> Result<(), String> {
    let overrides = command.map(Command::overrides).unwrap_or_default();
    let settings = Settings::load(&overrides).map_err(|e| e.to_string())?;
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx, &settings)
}

/// Dispatch a command with the given service context and settings.
fn dispatch_with_context(
    command: Option<&Command>,
    ctx: &ServiceContext,
    settings: &Settings,
) -> Result<(), String> {
    match command {
        None | Some(Command::Generate { .. }) => generate::run(ctx, settings),
        Some(Command::Verify { .. }) => verify::run(settings),
    }
}
