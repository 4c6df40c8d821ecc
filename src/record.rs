//! The named record value.

use serde::{Deserialize, Serialize};

/// Label prefix used when no other prefix is configured.
pub const DEFAULT_PREFIX: &str = "Test Instance";

/// A simple named value. The name is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
}

impl Record {
    /// Builds a record labelled `prefix` followed by the decimal text of `n`.
    #[must_use]
    pub fn new(prefix: &str, n: u64) -> Self {
        Self { name: label(prefix, n) }
    }

    /// The record's label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Formats the label for counter value `n`.
#[must_use]
pub fn label(prefix: &str, n: u64) -> String {
    format!("{prefix}{n}")
}
