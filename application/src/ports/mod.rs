//! Port definitions (interfaces for external dependencies)

pub mod llm_gateway;
pub mod progress;
pub mod template_loader;
