//! Application-level configuration.
//!
//! - [`OrchestrationParams`]: execution mode default and context cap

pub mod orchestration_params;

pub use orchestration_params::OrchestrationParams;
