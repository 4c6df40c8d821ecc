//! Fixed adapters that always return preset values.

use chrono::{DateTime, Utc};

use crate::ports::{Clock, IdGenerator};

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// ID generator that hands out the same identifier every time.
pub struct FixedIdGenerator(pub String);

impl IdGenerator for FixedIdGenerator {
    fn generate_id(&self) -> String {
        self.0.clone()
    }
}
