//! Application layer for role-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::OrchestrationParams;
pub use ports::{
    llm_gateway::{Completion, GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    template_loader::{RoleTemplateLoader, TemplateError},
};
pub use use_cases::run_roles::{
    ExecutionStrategy, ParallelStrategy, RoleExecutor, RoleRunner, RunRolesError, RunRolesInput,
    RunRolesUseCase, SequentialStrategy,
};
