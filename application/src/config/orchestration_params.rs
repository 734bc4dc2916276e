//! Orchestration parameters for a role run
//!
//! [`OrchestrationParams`] groups the static parameters that control how
//! [`RunRolesUseCase`](crate::use_cases::run_roles::RunRolesUseCase) runs
//! roles. These are application-layer concerns, not domain policy.

use council_domain::{DEFAULT_MAX_CONTEXT_CHARS, ExecutionMode};
use serde::{Deserialize, Serialize};

/// Run control parameters.
///
/// | Field | Effect |
/// |-------|--------|
/// | `mode` | Used when the caller does not pick a mode per run |
/// | `max_context_chars` | Cap on the prior-role transcript in sequential runs; `None` is unbounded |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationParams {
    pub mode: ExecutionMode,
    pub max_context_chars: Option<usize>,
}

impl Default for OrchestrationParams {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            max_context_chars: Some(DEFAULT_MAX_CONTEXT_CHARS),
        }
    }
}

impl OrchestrationParams {
    // ==================== Builder Methods ====================

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_context_chars(mut self, max: Option<usize>) -> Self {
        self.max_context_chars = max;
        self
    }
}
