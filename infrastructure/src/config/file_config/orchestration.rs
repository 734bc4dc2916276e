//! Orchestration configuration from TOML (`[orchestration]` section)

use council_application::OrchestrationParams;
use council_domain::{DEFAULT_MAX_CONTEXT_CHARS, ExecutionMode};
use serde::{Deserialize, Serialize};

/// Raw orchestration configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOrchestrationConfig {
    /// Run roles in parallel unless the command line says otherwise
    pub parallel: bool,
    /// Cap on the prior-role transcript in sequential runs
    pub max_context_chars: Option<usize>,
}

impl Default for FileOrchestrationConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            max_context_chars: Some(DEFAULT_MAX_CONTEXT_CHARS),
        }
    }
}

impl FileOrchestrationConfig {
    pub fn to_params(&self) -> OrchestrationParams {
        OrchestrationParams::default()
            .with_mode(ExecutionMode::from_parallel(self.parallel))
            .with_max_context_chars(self.max_context_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_params() {
        let config = FileOrchestrationConfig {
            parallel: true,
            max_context_chars: Some(4000),
        };
        let params = config.to_params();
        assert_eq!(params.mode, ExecutionMode::Parallel);
        assert_eq!(params.max_context_chars, Some(4000));
    }
}
