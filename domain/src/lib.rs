//! Domain layer for role-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Classification
//!
//! A [`TaskClassifier`] turns a free-text engineering question into a
//! [`TaskClassification`]: complexity tier, knowledge domains, the ordered
//! specialist [`Role`]s to consult (each with a temperature), and any
//! critical data that must be requested before the question can be answered.
//! Classification is deterministic and never calls the reasoning agent.
//!
//! ## Council
//!
//! Each consulted role produces a [`RoleOutput`]. Outputs are mined for
//! confidence, warnings and critical issues ([`extraction`]), checked for
//! disagreements ([`conflict`]), and aggregated into a [`FinalOutput`].

pub mod classification;
pub mod config;
pub mod conflict;
pub mod core;
pub mod extraction;
pub mod orchestration;
pub mod prompt;
pub mod role;

// Re-export commonly used types
pub use classification::{
    Domain, MAX_EMITTED_TEMPERATURE, TaskClassification, TaskClassifier, TaskComplexity,
};
pub use config::OutputFormat;
pub use conflict::{
    Claim, ConcreteCoverStrategy, Conflict, ConflictResolver, ConflictStrategy, ConflictType,
    MaterialClassStrategy,
};
pub use core::{error::DomainError, question::Question, request_context::RequestContext};
pub use extraction::{Extraction, OutputExtractor, PatternExtractor};
pub use orchestration::{
    ContextAccumulator, DEFAULT_MAX_CONTEXT_CHARS, ExecutionMode, FailureKind, FinalOutput,
    OutputStatus, RoleFailure, RoleOutput,
};
pub use prompt::RolePrompt;
pub use role::{Role, RoleCapability, RoleInvocation, capabilities, capability};
