//! Rendering a collection for stdout.
//!
//! Debug formats print the bare collection. Structured formats wrap it in a
//! [`Roster`] carrying run metadata from the service context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::context::ServiceContext;
use crate::error::RosterError;
use crate::record::Record;

/// A collection together with the run that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Identifier of the producing run.
    pub run_id: String,
    /// When the collection was built.
    pub generated_at: DateTime<Utc>,
    /// Number of records.
    pub count: usize,
    /// Records in construction order.
    pub records: Vec<Record>,
}

impl Roster {
    /// Stamps `records` with a run ID and timestamp from `ctx`.
    #[must_use]
    pub fn new(ctx: &ServiceContext, records: Vec<Record>) -> Self {
        Self {
            run_id: ctx.id_gen.generate_id(),
            generated_at: ctx.clock.now(),
            count: records.len(),
            records,
        }
    }
}

/// Renders `records` in the requested format.
///
/// # Errors
///
/// Returns [`RosterError::Render`] if JSON or YAML serialization fails.
pub fn render(
    ctx: &ServiceContext,
    records: Vec<Record>,
    format: OutputFormat,
) -> Result<String, RosterError> {
    let render_err = |reason: String| RosterError::Render {
        format: format.to_string(),
        reason,
    };
    match format {
        OutputFormat::Debug => Ok(format!("{records:?}")),
        OutputFormat::Pretty => Ok(format!("{records:#?}")),
        OutputFormat::Json => serde_json::to_string_pretty(&Roster::new(ctx, records))
            .map_err(|e| render_err(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(&Roster::new(ctx, records))
            .map_err(|e| render_err(e.to_string())),
    }
}
