//! Orchestration value objects - run-scoped results.
//!
//! - [`RoleOutput`] - one role's answer plus extracted signals
//! - [`RoleFailure`] - a role that could not produce an answer
//! - [`FinalOutput`] - the synthesized result of a whole run
//! - [`OutputStatus`] - cheap triage derived from a [`FinalOutput`]

use super::mode::ExecutionMode;
use crate::classification::TaskComplexity;
use crate::conflict::Conflict;
use crate::extraction::Extraction;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Answer produced by a single role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleOutput {
    pub role: Role,
    pub text: String,
    pub temperature_used: f64,
    pub tokens_used: u64,
    /// Completion time (milliseconds since epoch)
    pub timestamp: u64,
    /// Wall-clock duration of the agent call
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub critical_issues: Vec<String>,
}

impl RoleOutput {
    pub fn new(role: Role, text: impl Into<String>, temperature_used: f64, tokens_used: u64) -> Self {
        Self {
            role,
            text: text.into(),
            temperature_used,
            tokens_used,
            timestamp: current_timestamp(),
            elapsed_ms: 0,
            confidence: None,
            warnings: Vec::new(),
            critical_issues: Vec::new(),
        }
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Attach extracted signals; confidence is clamped to `[0, 1]`.
    pub fn with_extraction(mut self, extraction: Extraction) -> Self {
        self.confidence = extraction.confidence.map(|c| c.clamp(0.0, 1.0));
        self.warnings = extraction.warnings;
        self.critical_issues = extraction.critical_issues;
        self
    }
}

/// Why a role produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The role's prompt template could not be loaded
    Configuration,
    /// The reasoning-agent call failed
    Invocation,
}

/// A role that was planned but produced no output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleFailure {
    pub role: Role,
    pub kind: FailureKind,
    pub message: String,
}

impl RoleFailure {
    pub fn configuration(role: Role, message: impl Into<String>) -> Self {
        Self {
            role,
            kind: FailureKind::Configuration,
            message: message.into(),
        }
    }

    pub fn invocation(role: Role, message: impl Into<String>) -> Self {
        Self {
            role,
            kind: FailureKind::Invocation,
            message: message.into(),
        }
    }

    /// Critical-issue line scoped to the failing role
    pub fn as_issue(&self) -> String {
        match self.kind {
            FailureKind::Configuration => {
                format!("[{}] Role skipped, template unavailable: {}", self.role, self.message)
            }
            FailureKind::Invocation => {
                format!("[{}] Agent call failed: {}", self.role, self.message)
            }
        }
    }
}

/// Triage level of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStatus {
    Ok,
    Warnings,
    CriticalIssues,
}

impl OutputStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStatus::Ok => "OK",
            OutputStatus::Warnings => "WARNINGS",
            OutputStatus::CriticalIssues => "CRITICAL ISSUES FOUND",
        }
    }
}

impl std::fmt::Display for OutputStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synthesized result of one orchestrated run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalOutput {
    pub answer: String,
    pub complexity: TaskComplexity,
    pub execution_mode: ExecutionMode,
    /// Roles that produced output, in execution (priority) order
    pub roles_consulted: Vec<Role>,
    pub outputs: Vec<RoleOutput>,
    pub conflicts: Vec<Conflict>,
    pub warnings: Vec<String>,
    pub critical_issues: Vec<String>,
    #[serde(default)]
    pub failures: Vec<RoleFailure>,
    /// Data the classifier found missing from the question
    #[serde(default)]
    pub missing_data: Vec<String>,
    pub total_tokens: u64,
    pub execution_time_ms: u64,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_speedup: Option<f64>,
}

impl FinalOutput {
    pub fn status(&self) -> OutputStatus {
        if !self.critical_issues.is_empty() {
            OutputStatus::CriticalIssues
        } else if !self.warnings.is_empty() {
            OutputStatus::Warnings
        } else {
            OutputStatus::Ok
        }
    }

    pub fn all_roles_failed(&self) -> bool {
        self.roles_consulted.is_empty()
    }

    pub fn output(&self, role: Role) -> Option<&RoleOutput> {
        self.outputs.iter().find(|o| o.role == role)
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
