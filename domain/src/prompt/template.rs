//! Role prompt assembly

use crate::core::question::Question;
use crate::core::request_context::RequestContext;

/// Builder for one role's prompt
///
/// Sections appear in a fixed order: role template, structured context,
/// invocation context, prior role outputs, question. Empty sections are
/// left out.
///
/// # Example
///
/// ```
/// use council_domain::{Question, RolePrompt};
///
/// let question = Question::new("What is the OTSKP code for formwork?");
/// let prompt = RolePrompt::new("You are a cost estimator.", &question).build();
///
/// assert!(prompt.starts_with("You are a cost estimator."));
/// assert!(prompt.ends_with("What is the OTSKP code for formwork?\n"));
/// ```
#[derive(Debug, Clone)]
pub struct RolePrompt<'a> {
    template: &'a str,
    question: &'a Question,
    request_context: Option<&'a RequestContext>,
    invocation_context: Option<&'a str>,
    prior_outputs: Option<&'a str>,
}

impl<'a> RolePrompt<'a> {
    pub fn new(template: &'a str, question: &'a Question) -> Self {
        Self {
            template,
            question,
            request_context: None,
            invocation_context: None,
            prior_outputs: None,
        }
    }

    pub fn with_request_context(mut self, context: Option<&'a RequestContext>) -> Self {
        self.request_context = context;
        self
    }

    pub fn with_invocation_context(mut self, context: Option<&'a str>) -> Self {
        self.invocation_context = context;
        self
    }

    /// Transcript of earlier roles in a sequential run
    pub fn with_prior_outputs(mut self, transcript: &'a str) -> Self {
        self.prior_outputs = Some(transcript).filter(|t| !t.trim().is_empty());
        self
    }

    pub fn build(&self) -> String {
        let mut prompt = String::new();
        prompt.push_str(self.template.trim_end());
        prompt.push_str("\n\n");

        if let Some(rendered) = self.request_context.and_then(RequestContext::render) {
            prompt.push_str("## Project context\n");
            prompt.push_str(rendered.trim_end());
            prompt.push_str("\n\n");
        }

        if let Some(context) = self.invocation_context.filter(|c| !c.trim().is_empty()) {
            prompt.push_str("## Focus\n");
            prompt.push_str(context.trim_end());
            prompt.push_str("\n\n");
        }

        if let Some(transcript) = self.prior_outputs {
            prompt.push_str("## Findings from previous specialists\n");
            prompt.push_str(transcript.trim_end());
            prompt.push_str("\n\n");
        }

        prompt.push_str("## Question\n");
        prompt.push_str(self.question.content());
        prompt.push('\n');
        prompt
    }
}
