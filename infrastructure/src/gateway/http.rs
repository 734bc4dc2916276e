//! OpenAI-compatible chat completions gateway

use crate::config::FileAgentConfig;
use async_trait::async_trait;
use council_application::{Completion, GatewayError, LlmGateway};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    total_tokens: u64,
}

/// Gateway that sends each role prompt as one user message to
/// `<endpoint>/chat/completions`
pub struct HttpLlmGateway {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    max_tokens: Option<u32>,
}

impl HttpLlmGateway {
    /// Build from `[agent]` config; the API key is read from `api_key_env`.
    ///
    /// A missing key is allowed so local endpoints (Ollama, vLLM) work.
    pub fn from_config(config: &FileAgentConfig) -> Result<Self, GatewayError> {
        let api_key = std::env::var(&config.api_key_env).ok();
        if api_key.is_none() {
            debug!(
                "{} not set; sending requests without Authorization",
                config.api_key_env
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str, temperature: f64) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": temperature,
            "stream": false,
        });
        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        body
    }

    fn parse_response(body: &str) -> Result<Completion, GatewayError> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| GatewayError::InvalidResponse(format!("Invalid JSON: {}", e)))?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::InvalidResponse("No message content".to_string()))?;
        let tokens_used = response.usage.map(|u| u.total_tokens).unwrap_or(0);

        Ok(Completion { text, tokens_used })
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<Completion, GatewayError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %self.model, temperature, "Sending completion request");

        let mut request = self.client.post(&url).json(&self.request_body(prompt, temperature));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else if e.is_connect() {
                GatewayError::ConnectionError(e.to_string())
            } else {
                GatewayError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            warn!(status = %status, "Agent endpoint returned an error");
            let snippet: String = body.chars().take(200).collect();
            return Err(GatewayError::RequestFailed(format!("HTTP {}: {}", status, snippet)));
        }

        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> HttpLlmGateway {
        let config = FileAgentConfig {
            endpoint: "http://localhost:11434/v1/".to_string(),
            model: "qwen2.5:14b".to_string(),
            api_key_env: "ROLE_COUNCIL_TEST_UNSET_KEY".to_string(),
            ..FileAgentConfig::default()
        };
        HttpLlmGateway::from_config(&config).unwrap()
    }

    #[test]
    fn test_from_config_trims_endpoint() {
        let gateway = gateway();
        assert_eq!(gateway.base_url, "http://localhost:11434/v1");
        assert!(gateway.api_key.is_none());
        assert_eq!(gateway.model(), "qwen2.5:14b");
    }

    #[test]
    fn test_request_body() {
        let body = gateway().request_body("Prompt text", 0.3);
        assert_eq!(body["model"], "qwen2.5:14b");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Prompt text");
        assert_eq!(body["temperature"], 0.3);
        assert_eq!(body["max_tokens"], 2048);
    }

    #[test]
    fn test_parse_response() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Use C30/37"}}],
            "usage": {"prompt_tokens": 40, "completion_tokens": 5, "total_tokens": 45}
        }"#;
        let completion = HttpLlmGateway::parse_response(body).unwrap();
        assert_eq!(completion, Completion::new("Use C30/37", 45));
    }

    #[test]
    fn test_parse_response_without_usage() {
        let body = r#"{"choices": [{"message": {"content": "ok"}}]}"#;
        assert_eq!(HttpLlmGateway::parse_response(body).unwrap().tokens_used, 0);
    }

    #[test]
    fn test_parse_response_without_choices() {
        let err = HttpLlmGateway::parse_response(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_response_invalid_json() {
        let err = HttpLlmGateway::parse_response("<html>").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
