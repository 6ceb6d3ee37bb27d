//! Error types for the orbitsim engine.
//!
//! Only command-boundary failures are surfaced here. Near-zero separations and
//! non-finite bodies are recovered inside the tick and reported through
//! [`TickStats`](crate::simulation::snapshot::TickStats) and removal notices instead.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Body creation or mass update rejected (non-positive mass, non-finite state).
    #[error("invalid body spec: {reason}")]
    InvalidBodySpec { reason: String },

    /// Runtime parameter outside its valid range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Scenario file is structurally valid YAML but semantically wrong.
    #[error("scenario error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl EngineError {
    pub(crate) fn invalid_body(reason: impl Into<String>) -> Self {
        EngineError::InvalidBodySpec { reason: reason.into() }
    }
}
