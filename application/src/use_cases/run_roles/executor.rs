//! Single-role execution

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::template_loader::RoleTemplateLoader;
use async_trait::async_trait;
use council_domain::{
    OutputExtractor, PatternExtractor, Question, RequestContext, RoleFailure, RoleInvocation,
    RoleOutput, RolePrompt,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of running one role
pub type RoleAttempt = Result<RoleOutput, RoleFailure>;

/// Per-run inputs shared by every role
#[derive(Debug, Clone, Copy)]
pub struct RoleRequest<'a> {
    pub question: &'a Question,
    pub context: Option<&'a RequestContext>,
}

/// Runs a single role: prompt, agent call, extraction
///
/// Execution strategies depend on this trait rather than on a concrete
/// gateway, so they can be exercised with a fake runner.
#[async_trait]
pub trait RoleRunner: Send + Sync {
    /// `prior` is the rendered transcript of earlier roles, empty if none
    async fn run_role(
        &self,
        invocation: &RoleInvocation,
        request: &RoleRequest<'_>,
        prior: &str,
    ) -> RoleAttempt;
}

/// [`RoleRunner`] backed by the reasoning-agent gateway
pub struct RoleExecutor<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    templates: Arc<dyn RoleTemplateLoader>,
    extractor: Arc<dyn OutputExtractor>,
}

impl<G: LlmGateway + 'static> RoleExecutor<G> {
    pub fn new(gateway: Arc<G>, templates: Arc<dyn RoleTemplateLoader>) -> Self {
        Self {
            gateway,
            templates,
            extractor: Arc::new(PatternExtractor),
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn OutputExtractor>) -> Self {
        self.extractor = extractor;
        self
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> RoleRunner for RoleExecutor<G> {
    async fn run_role(
        &self,
        invocation: &RoleInvocation,
        request: &RoleRequest<'_>,
        prior: &str,
    ) -> RoleAttempt {
        let role = invocation.role();

        let template = match self.templates.load_role_template(role) {
            Ok(template) => template,
            Err(e) => {
                warn!(role = %role, "Skipping role: {}", e);
                return Err(RoleFailure::configuration(role, e.to_string()));
            }
        };

        let prompt = RolePrompt::new(&template, request.question)
            .with_request_context(request.context)
            .with_invocation_context(invocation.context())
            .with_prior_outputs(prior)
            .build();
        debug!(role = %role, prompt_chars = prompt.len(), "Calling agent");

        let started = Instant::now();
        let completion = match self
            .gateway
            .complete(&prompt, invocation.temperature())
            .await
        {
            Ok(completion) => completion,
            Err(e) => {
                warn!(role = %role, "Agent call failed: {}", e);
                return Err(RoleFailure::invocation(role, e.to_string()));
            }
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        info!(
            role = %role,
            tokens = completion.tokens_used,
            elapsed_ms,
            "Role responded"
        );

        let extraction = self.extractor.extract(&completion.text);
        Ok(RoleOutput::new(
            role,
            completion.text,
            invocation.temperature(),
            completion.tokens_used,
        )
        .with_elapsed_ms(elapsed_ms)
        .with_extraction(extraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::run_roles::testing::{MockGateway, StubTemplates};
    use council_domain::{Extraction, FailureKind, Role};

    fn request(question: &Question) -> RoleRequest<'_> {
        RoleRequest {
            question,
            context: None,
        }
    }

    #[tokio::test]
    async fn test_successful_role_extracts_signals() {
        let gateway = Arc::new(MockGateway::new().reply(
            Role::ConcreteSpecialist,
            "Use C30/37.\nWARNING: Check freeze-thaw exposure\nConfidence: 80%",
        ));
        let executor = RoleExecutor::new(gateway.clone(), Arc::new(StubTemplates::all()));
        let question = Question::new("Which concrete for a retaining wall?");
        let invocation = RoleInvocation::new(Role::ConcreteSpecialist, 0.3, 0);

        let output = executor
            .run_role(&invocation, &request(&question), "")
            .await
            .unwrap();

        assert_eq!(output.role, Role::ConcreteSpecialist);
        assert_eq!(output.temperature_used, 0.3);
        assert_eq!(output.tokens_used, 100);
        assert_eq!(output.confidence, Some(0.8));
        assert_eq!(output.warnings, vec!["Check freeze-thaw exposure"]);

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].temperature, 0.3);
        assert!(calls[0].prompt.contains("Which concrete for a retaining wall?"));
    }

    #[tokio::test]
    async fn test_prior_transcript_and_invocation_context_in_prompt() {
        let gateway = Arc::new(MockGateway::new());
        let executor = RoleExecutor::new(gateway.clone(), Arc::new(StubTemplates::all()));
        let question = Question::new("Q");
        let invocation =
            RoleInvocation::new(Role::StandardsChecker, 0.1, 2).with_context("Final review");

        executor
            .run_role(&invocation, &request(&question), "=== Structural Engineer ===\nC25/30\n")
            .await
            .unwrap();

        let prompt = &gateway.calls()[0].prompt;
        assert!(prompt.contains("Final review"));
        assert!(prompt.contains("=== Structural Engineer ==="));
    }

    #[tokio::test]
    async fn test_missing_template_is_configuration_failure() {
        let gateway = Arc::new(MockGateway::new());
        let executor = RoleExecutor::new(
            gateway.clone(),
            Arc::new(StubTemplates::without(Role::CostEstimator)),
        );
        let question = Question::new("Q");
        let invocation = RoleInvocation::new(Role::CostEstimator, 0.2, 0);

        let failure = executor
            .run_role(&invocation, &request(&question), "")
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Configuration);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_gateway_error_is_invocation_failure() {
        let gateway = Arc::new(MockGateway::new().fail(Role::StructuralEngineer, "timeout"));
        let executor = RoleExecutor::new(gateway, Arc::new(StubTemplates::all()));
        let question = Question::new("Q");
        let invocation = RoleInvocation::new(Role::StructuralEngineer, 0.3, 0);

        let failure = executor
            .run_role(&invocation, &request(&question), "")
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Invocation);
        assert_eq!(
            failure.as_issue(),
            "[Structural Engineer] Agent call failed: Request failed: timeout"
        );
    }

    #[tokio::test]
    async fn test_custom_extractor() {
        struct Fixed;
        impl OutputExtractor for Fixed {
            fn extract(&self, _text: &str) -> Extraction {
                Extraction {
                    confidence: Some(0.42),
                    ..Extraction::default()
                }
            }
        }

        let executor = RoleExecutor::new(Arc::new(MockGateway::new()), Arc::new(StubTemplates::all()))
            .with_extractor(Arc::new(Fixed));
        let question = Question::new("Q");
        let invocation = RoleInvocation::new(Role::CostEstimator, 0.2, 0);

        let output = executor
            .run_role(&invocation, &request(&question), "")
            .await
            .unwrap();
        assert_eq!(output.confidence, Some(0.42));
    }
}
