//! Error type for roster operations.

use thiserror::Error;

/// Errors surfaced by configuration, rendering, and verification.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A configuration value could not be parsed.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidSetting {
        /// Variable or flag name.
        key: String,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Serializing the roster failed.
    #[error("Failed to render {format} output: {reason}")]
    Render {
        /// Output format being rendered.
        format: String,
        /// Serializer message.
        reason: String,
    },

    /// A built collection broke a labeling invariant.
    #[error("Invariant violated: {0}")]
    Invariant(String),
}
