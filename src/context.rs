//! Service context bundling the port trait objects.

use chrono::{DateTime, Utc};

use crate::adapters::fixed::{FixedClock, FixedIdGenerator};
use crate::adapters::live::{LiveClock, LiveIdGenerator};
use crate::ports::{Clock, IdGenerator};

/// Bundles the port trait objects a run needs.
pub struct ServiceContext {
    /// Clock for stamping the roster.
    pub clock: Box<dyn Clock>,
    /// ID generator for the run identifier.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a context with the system clock and random run IDs.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Creates a context that always reports the given time and run ID.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>, run_id: impl Into<String>) -> Self {
        Self {
            clock: Box::new(FixedClock(at)),
            id_gen: Box::new(FixedIdGenerator(run_id.into())),
        }
    }
}
