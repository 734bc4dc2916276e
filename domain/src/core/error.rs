//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These are invariant violations on domain values. Failures of external
/// collaborators (agent calls, template lookup) are modelled in the
/// application layer and never surface as `DomainError`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Temperature {0} is outside [0.0, 1.0]")]
    InvalidTemperature(f64),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown execution mode: {0}")]
    UnknownExecutionMode(String),
}
