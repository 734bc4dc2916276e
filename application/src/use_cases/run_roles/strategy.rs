//! Execution strategies
//!
//! Sequential and parallel execution are interchangeable behind
//! [`ExecutionStrategy`]. Both return one attempt per invocation, in
//! invocation order, regardless of completion order.

use super::executor::{RoleAttempt, RoleRequest, RoleRunner};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use council_domain::{ContextAccumulator, ExecutionMode, RoleInvocation, RoleOutput};
use futures::future::join_all;
use tracing::debug;

#[async_trait]
pub trait ExecutionStrategy: Send + Sync {
    fn mode(&self) -> ExecutionMode;

    async fn run(
        &self,
        runner: &dyn RoleRunner,
        invocations: &[RoleInvocation],
        request: &RoleRequest<'_>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<RoleAttempt>;
}

/// One role at a time, each seeing the outputs of the roles before it
#[derive(Debug, Clone, Default)]
pub struct SequentialStrategy {
    accumulator: ContextAccumulator,
}

impl SequentialStrategy {
    pub fn new(accumulator: ContextAccumulator) -> Self {
        Self { accumulator }
    }
}

#[async_trait]
impl ExecutionStrategy for SequentialStrategy {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }

    async fn run(
        &self,
        runner: &dyn RoleRunner,
        invocations: &[RoleInvocation],
        request: &RoleRequest<'_>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<RoleAttempt> {
        let mut attempts = Vec::with_capacity(invocations.len());
        let mut completed: Vec<RoleOutput> = Vec::new();

        for invocation in invocations {
            let prior = self.accumulator.render(&completed);
            debug!(
                role = %invocation.role(),
                prior_chars = prior.len(),
                "Running role sequentially"
            );

            progress.on_role_start(invocation.role());
            let attempt = runner.run_role(invocation, request, &prior).await;
            progress.on_role_complete(invocation.role(), attempt.is_ok());

            if let Ok(output) = &attempt {
                completed.push(output.clone());
            }
            attempts.push(attempt);
        }

        attempts
    }
}

/// All roles at once with no inter-role context
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelStrategy;

#[async_trait]
impl ExecutionStrategy for ParallelStrategy {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }

    async fn run(
        &self,
        runner: &dyn RoleRunner,
        invocations: &[RoleInvocation],
        request: &RoleRequest<'_>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<RoleAttempt> {
        debug!(roles = invocations.len(), "Dispatching roles in parallel");

        let futures = invocations.iter().map(|invocation| async move {
            progress.on_role_start(invocation.role());
            let attempt = runner.run_role(invocation, request, "").await;
            progress.on_role_complete(invocation.role(), attempt.is_ok());
            attempt
        });

        // join_all yields results in input order
        join_all(futures).await
    }
}
