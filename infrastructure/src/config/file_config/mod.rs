//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agent;
mod orchestration;
mod output;
mod templates;

pub use agent::{AgentProvider, FileAgentConfig};
pub use orchestration::FileOrchestrationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use templates::FileTemplatesConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("agent.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("orchestration.max_context_chars cannot be 0")]
    InvalidContextCap,

    #[error("agent.model cannot be empty")]
    EmptyModelName,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Reasoning-agent settings
    pub agent: FileAgentConfig,
    /// Role execution settings
    pub orchestration: FileOrchestrationConfig,
    /// Role template settings
    pub templates: FileTemplatesConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.agent.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if let Some(0) = self.orchestration.max_context_chars {
            return Err(ConfigValidationError::InvalidContextCap);
        }

        if self.agent.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[agent]
provider = "http"
endpoint = "http://localhost:11434/v1"
model = "qwen2.5:14b"
api_key_env = "LOCAL_KEY"
timeout_seconds = 60
max_tokens = 1024

[orchestration]
parallel = true
max_context_chars = 8000

[templates]
dir = "prompts"
strict = true

[output]
format = "full"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.agent.endpoint, "http://localhost:11434/v1");
        assert_eq!(config.agent.model, "qwen2.5:14b");
        assert_eq!(config.agent.timeout_seconds, 60);
        assert_eq!(config.agent.max_tokens, Some(1024));
        assert!(config.orchestration.parallel);
        assert_eq!(config.orchestration.max_context_chars, Some(8000));
        assert_eq!(
            config.templates.dir.as_deref(),
            Some(std::path::Path::new("prompts"))
        );
        assert!(config.templates.strict);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[agent]
model = "gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.agent.model, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.agent.timeout_seconds, 120);
        assert!(!config.orchestration.parallel);
        assert!(config.output.color);
        assert!(config.templates.dir.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[agent]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_zero_context_cap() {
        let toml_str = r#"
[orchestration]
max_context_chars = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidContextCap)
        );
    }

    #[test]
    fn test_validate_empty_model_name() {
        let toml_str = r#"
[agent]
model = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }
}
