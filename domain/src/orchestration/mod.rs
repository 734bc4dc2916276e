//! Role orchestration domain
//!
//! Execution modes, the per-role and aggregated result types, and the
//! accumulated context handed between roles in a sequential run.

pub mod context;
pub mod mode;
pub mod value_objects;

pub use context::{ContextAccumulator, DEFAULT_MAX_CONTEXT_CHARS};
pub use mode::ExecutionMode;
pub use value_objects::{FailureKind, FinalOutput, OutputStatus, RoleFailure, RoleOutput};
