//! Record factory and collector.
//!
//! A [`RecordFactory`] owns the counter that numbers its records, so every
//! collection run starts from zero and no state survives between runs.

use tracing::debug;

use crate::record::{Record, DEFAULT_PREFIX};

/// Number of records built when no count is configured.
pub const DEFAULT_COUNT: usize = 1000;

/// Monotonic label counter with post-increment semantics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value, then advances by one.
    pub fn next(&mut self) -> u64 {
        let current = self.value;
        self.value += 1;
        current
    }

    /// The value the next call to [`Counter::next`] will return.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Builds records with sequential labels under one prefix.
#[derive(Debug, Clone)]
pub struct RecordFactory {
    prefix: String,
    counter: Counter,
}

impl RecordFactory {
    /// Creates a factory whose first record is labelled `prefix` + `0`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Counter::new(),
        }
    }

    /// Builds the next record.
    pub fn make(&mut self) -> Record {
        Record::new(&self.prefix, self.counter.next())
    }

    /// How many records this factory has built.
    #[must_use]
    pub fn produced(&self) -> u64 {
        self.counter.value()
    }

    /// The label prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for RecordFactory {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

/// Builds exactly `count` records in construction order.
#[must_use]
pub fn collect(count: usize, prefix: &str) -> Vec<Record> {
    debug!(count, prefix, "collecting records");
    let mut factory = RecordFactory::new(prefix);
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(factory.make());
    }
    records
}

/// Builds the default collection: `Test Instance0` through `Test Instance999`.
#[must_use]
pub fn collect_default() -> Vec<Record> {
    collect(DEFAULT_COUNT, DEFAULT_PREFIX)
}
