//! Test doubles shared by the run_roles tests

use crate::ports::llm_gateway::{Completion, GatewayError, LlmGateway};
use crate::ports::template_loader::{RoleTemplateLoader, TemplateError};
use async_trait::async_trait;
use council_domain::Role;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Templates are `ROLE:<id>` so the gateway can tell roles apart
pub struct StubTemplates {
    missing: HashSet<Role>,
}

impl StubTemplates {
    pub fn all() -> Self {
        Self {
            missing: HashSet::new(),
        }
    }

    pub fn without(role: Role) -> Self {
        Self {
            missing: HashSet::from([role]),
        }
    }
}

impl RoleTemplateLoader for StubTemplates {
    fn load_role_template(&self, role: Role) -> Result<String, TemplateError> {
        if self.missing.contains(&role) {
            return Err(TemplateError::NotFound(role));
        }
        Ok(format!("ROLE:{}", role.as_str()))
    }
}

/// A recorded gateway call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub role: Role,
    pub prompt: String,
    pub temperature: f64,
}

/// Answers per role, optionally after a delay
pub struct MockGateway {
    replies: HashMap<Role, Result<String, String>>,
    delay: Duration,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, role: Role, text: &str) -> Self {
        self.replies.insert(role, Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, role: Role, message: &str) -> Self {
        self.replies.insert(role, Err(message.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn role_of(prompt: &str) -> Role {
        prompt
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("ROLE:"))
            .and_then(|id| id.parse().ok())
            .expect("prompt starts with a stub template")
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<Completion, GatewayError> {
        let role = Self::role_of(prompt);
        self.calls.lock().unwrap().push(RecordedCall {
            role,
            prompt: prompt.to_string(),
            temperature,
        });
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.replies.get(&role) {
            Some(Ok(text)) => Ok(Completion::new(text.clone(), 100)),
            Some(Err(message)) => Err(GatewayError::RequestFailed(message.clone())),
            None => Ok(Completion::new(format!("{} has nothing to add", role), 10)),
        }
    }
}
