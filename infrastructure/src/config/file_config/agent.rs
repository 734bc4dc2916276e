//! Reasoning-agent configuration from TOML (`[agent]` section)

use serde::{Deserialize, Serialize};

/// Which gateway answers role prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentProvider {
    /// OpenAI-compatible chat completions endpoint
    #[default]
    Http,
    /// Offline canned answers, for demos and dry runs
    Scripted,
}

/// Raw agent configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    pub provider: AgentProvider,
    /// Base URL; `/chat/completions` is appended
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the bearer token
    pub api_key_env: String,
    /// Timeout in seconds for a single agent call
    pub timeout_seconds: u64,
    pub max_tokens: Option<u32>,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            provider: AgentProvider::Http,
            endpoint: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_seconds: 120,
            max_tokens: Some(2048),
        }
    }
}
