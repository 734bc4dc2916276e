//! LLM Gateway port
//!
//! Defines the interface for the opaque reasoning-agent call.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Text returned by the reasoning agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub tokens_used: u64,
}

impl Completion {
    pub fn new(text: impl Into<String>, tokens_used: u64) -> Self {
        Self {
            text: text.into(),
            tokens_used,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the reasoning agent.
/// Implementations (adapters) live in the infrastructure layer. There is no
/// retry at this level; a failed call fails the role that made it.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one prompt at the given sampling temperature
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<Completion, GatewayError>;
}
