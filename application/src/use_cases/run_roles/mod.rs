//! Run Roles use case
//!
//! Executes the roles selected by the classifier, resolves conflicts
//! between their outputs, and synthesizes a [`FinalOutput`].
//!
//! ```text
//! EXECUTING ──► CONFLICT_RESOLUTION ──► SYNTHESIZED
//! ```
//!
//! No step retries. Role failures are recorded on the result and the run
//! carries on; even a run in which every role fails returns normally.

mod executor;
mod strategy;
#[cfg(test)]
mod testing;

pub use executor::{RoleAttempt, RoleExecutor, RoleRequest, RoleRunner};
pub use strategy::{ExecutionStrategy, ParallelStrategy, SequentialStrategy};

use crate::config::OrchestrationParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::template_loader::RoleTemplateLoader;
use council_domain::{
    ContextAccumulator, ConflictResolver, ExecutionMode, FinalOutput, OutputExtractor, Question,
    RequestContext, RoleFailure, RoleOutput, TaskClassification,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur before any role runs
#[derive(Error, Debug)]
pub enum RunRolesError {
    #[error("Classification selected no roles")]
    NoRoles,
}

/// Input for the RunRoles use case
#[derive(Debug, Clone)]
pub struct RunRolesInput {
    pub question: Question,
    pub classification: TaskClassification,
    /// Opaque caller context, rendered verbatim into every prompt
    pub context: Option<RequestContext>,
    /// Overrides [`OrchestrationParams::mode`] for this run
    pub mode: Option<ExecutionMode>,
}

impl RunRolesInput {
    pub fn new(question: impl Into<Question>, classification: TaskClassification) -> Self {
        Self {
            question: question.into(),
            classification,
            context: None,
            mode: None,
        }
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn parallel(self, parallel: bool) -> Self {
        self.with_mode(ExecutionMode::from_parallel(parallel))
    }
}

/// Use case for running a council of roles
pub struct RunRolesUseCase<G: LlmGateway + 'static> {
    executor: RoleExecutor<G>,
    resolver: ConflictResolver,
    params: OrchestrationParams,
}

impl<G: LlmGateway + 'static> RunRolesUseCase<G> {
    pub fn new(gateway: Arc<G>, templates: Arc<dyn RoleTemplateLoader>) -> Self {
        Self {
            executor: RoleExecutor::new(gateway, templates),
            resolver: ConflictResolver::default(),
            params: OrchestrationParams::default(),
        }
    }

    pub fn with_params(mut self, params: OrchestrationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn OutputExtractor>) -> Self {
        self.executor = self.executor.with_extractor(extractor);
        self
    }

    pub fn with_resolver(mut self, resolver: ConflictResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunRolesInput) -> Result<FinalOutput, RunRolesError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunRolesInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<FinalOutput, RunRolesError> {
        let plan = input.classification.roles_ordered();
        if plan.is_empty() {
            return Err(RunRolesError::NoRoles);
        }

        let strategy = self.strategy_for(input.mode.unwrap_or(self.params.mode));
        let mode = strategy.mode();
        info!(
            "Starting council with {} roles ({})",
            plan.len(),
            mode.as_str()
        );
        progress.on_run_start(plan.len(), mode);

        let request = RoleRequest {
            question: &input.question,
            context: input.context.as_ref(),
        };

        let started = Instant::now();
        let attempts = strategy
            .run(&self.executor, &plan, &request, progress)
            .await;
        let wall_ms = started.elapsed().as_secs_f64() * 1000.0;

        let mut outputs = Vec::new();
        let mut failures = Vec::new();
        for attempt in attempts {
            match attempt {
                Ok(output) => outputs.push(output),
                Err(failure) => failures.push(failure),
            }
        }

        let conflicts = self.resolver.resolve(&outputs);
        if !conflicts.is_empty() {
            info!("Resolved {} conflict(s)", conflicts.len());
        }
        progress.on_conflicts_resolved(conflicts.len());

        let output = synthesize(
            &input.classification,
            mode,
            outputs,
            failures,
            conflicts,
            wall_ms,
        );

        if output.all_roles_failed() {
            warn!("Every role failed; returning critical issues only");
        }
        info!(
            tokens = output.total_tokens,
            elapsed_ms = output.execution_time_ms,
            status = output.status().as_str(),
            "Council finished"
        );
        progress.on_run_complete(&output);

        Ok(output)
    }

    fn strategy_for(&self, mode: ExecutionMode) -> Box<dyn ExecutionStrategy> {
        match mode {
            ExecutionMode::Sequential => Box::new(SequentialStrategy::new(
                ContextAccumulator::new(self.params.max_context_chars),
            )),
            ExecutionMode::Parallel => Box::new(ParallelStrategy),
        }
    }
}

fn synthesize(
    classification: &TaskClassification,
    mode: ExecutionMode,
    outputs: Vec<RoleOutput>,
    failures: Vec<RoleFailure>,
    conflicts: Vec<council_domain::Conflict>,
    wall_ms: f64,
) -> FinalOutput {
    let warnings = dedupe(outputs.iter().flat_map(|o| o.warnings.iter().cloned()));
    let critical_issues = dedupe(
        outputs
            .iter()
            .flat_map(|o| o.critical_issues.iter().cloned())
            .chain(failures.iter().map(RoleFailure::as_issue)),
    );

    let confidence = if outputs.is_empty() {
        0.0
    } else {
        let extracted: Vec<f64> = outputs.iter().filter_map(|o| o.confidence).collect();
        if extracted.is_empty() {
            classification.confidence
        } else {
            round2(extracted.iter().sum::<f64>() / extracted.len() as f64)
        }
    };

    let parallel_speedup = if mode.is_parallel() && !outputs.is_empty() && wall_ms > 0.0 {
        let summed: u64 = outputs.iter().map(|o| o.elapsed_ms).sum();
        Some(round2(summed as f64 / wall_ms))
    } else {
        None
    };

    // The last role in priority order reviews with everything before it
    let answer = outputs
        .last()
        .map(|o| o.text.clone())
        .unwrap_or_default();

    FinalOutput {
        answer,
        complexity: classification.complexity,
        execution_mode: mode,
        roles_consulted: outputs.iter().map(|o| o.role).collect(),
        total_tokens: outputs.iter().map(|o| o.tokens_used).sum(),
        outputs,
        conflicts,
        warnings,
        critical_issues,
        failures,
        missing_data: classification.missing_data.clone(),
        execution_time_ms: wall_ms.round() as u64,
        confidence,
        parallel_speedup,
    }
}

fn dedupe(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
