//! Infrastructure layer for role-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;
pub mod templates;

// Re-export commonly used types
pub use config::{
    AgentProvider, ConfigLoader, ConfigValidationError, FileAgentConfig, FileConfig,
    FileOrchestrationConfig, FileOutputConfig, FileOutputFormat, FileTemplatesConfig,
};
pub use gateway::{HttpLlmGateway, ScriptedGateway};
pub use templates::{BuiltinTemplateLoader, DirectoryTemplateLoader};
