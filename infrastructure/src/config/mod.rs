//! Configuration file loading for role-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `COUNCIL_*` (e.g. `COUNCIL_AGENT__MODEL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml`, or `./.council.toml` if the former is absent
//! 4. Global: `$XDG_CONFIG_HOME/role-council/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    AgentProvider, ConfigValidationError, FileAgentConfig, FileConfig, FileOrchestrationConfig,
    FileOutputConfig, FileOutputFormat, FileTemplatesConfig,
};
pub use loader::ConfigLoader;
