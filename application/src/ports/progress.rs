//! Progress notification port
//!
//! Defines the interface for reporting progress during a council run.

use council_domain::{ExecutionMode, FinalOutput, Role};

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before any role runs
    fn on_run_start(&self, total_roles: usize, mode: ExecutionMode);

    /// Called when a role's agent call is about to be made
    fn on_role_start(&self, role: Role);

    /// Called when a role finishes, successfully or not
    fn on_role_complete(&self, role: Role, success: bool);

    /// Called after conflict resolution
    fn on_conflicts_resolved(&self, _count: usize) {}

    /// Called with the synthesized result
    fn on_run_complete(&self, _output: &FinalOutput) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_run_start(&self, _total_roles: usize, _mode: ExecutionMode) {}
    fn on_role_start(&self, _role: Role) {}
    fn on_role_complete(&self, _role: Role, _success: bool) {}
}
