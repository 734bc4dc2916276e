//! Opaque structured context supplied by the caller.
//!
//! The subsystem never interprets the context beyond the `has_files` /
//! `files` flags read by the classifier; everything else is rendered
//! verbatim into role prompts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-supplied structured context (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestContext(Value);

impl RequestContext {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a context from a JSON string
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self)
    }

    /// Context that only flags attached files
    pub fn with_files() -> Self {
        Self(serde_json::json!({ "has_files": true }))
    }

    /// Set the `has_files` flag, keeping everything else.
    ///
    /// Non-object contexts are wrapped as `{"context": <value>, "has_files": true}`.
    pub fn mark_files_attached(self) -> Self {
        let mut map = match self.0 {
            Value::Object(map) => map,
            Value::Null => serde_json::Map::new(),
            other => {
                let mut map = serde_json::Map::new();
                map.insert("context".to_string(), other);
                map
            }
        };
        map.insert("has_files".to_string(), Value::Bool(true));
        Self(Value::Object(map))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Whether the caller attached project files (drawings, reports, ...).
    pub fn has_files(&self) -> bool {
        if self.0.get("has_files").and_then(Value::as_bool) == Some(true) {
            return true;
        }
        self.0
            .get("files")
            .and_then(Value::as_array)
            .is_some_and(|files| !files.is_empty())
    }

    /// Render the context for inclusion in a prompt.
    ///
    /// Returns `None` for an empty context so callers can skip the section.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        match &self.0 {
            Value::String(s) => Some(s.clone()),
            other => serde_json::to_string_pretty(other).ok(),
        }
    }
}

impl From<Value> for RequestContext {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
