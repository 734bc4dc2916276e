//! Offline gateway with canned answers

use async_trait::async_trait;
use council_application::{Completion, GatewayError, LlmGateway};
use council_domain::Role;

/// Answers every prompt from a fixed rule list: the first rule whose
/// needle occurs in the prompt wins, otherwise the default reply.
///
/// Token usage is the reply's whitespace-separated word count.
#[derive(Debug, Clone)]
pub struct ScriptedGateway {
    rules: Vec<(String, String)>,
    default_reply: String,
}

impl ScriptedGateway {
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            default_reply: default_reply.into(),
        }
    }

    pub fn with_rule(mut self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules.push((needle.into(), reply.into()));
        self
    }

    /// Canned answer per role, keyed on the role's name in its template
    pub fn demo() -> Self {
        Role::ALL.iter().fold(
            Self::new("No specialist opinion available.\nConfidence: 50%"),
            |gateway, role| gateway.with_rule(role.display_name(), demo_reply(*role)),
        )
    }

    fn reply_for(&self, prompt: &str) -> &str {
        // Only the template part identifies the role
        let head = prompt.split("## Question").next().unwrap_or(prompt);
        let head = head
            .split("## Findings from previous specialists")
            .next()
            .unwrap_or(head);
        self.rules
            .iter()
            .find(|(needle, _)| head.contains(needle.as_str()))
            .map(|(_, reply)| reply.as_str())
            .unwrap_or(&self.default_reply)
    }
}

fn demo_reply(role: Role) -> &'static str {
    match role {
        Role::DocumentValidator => {
            "The submission is internally consistent for a preliminary check.\n\
             WARNING: Geotechnical report not referenced\n\
             Confidence: 70%"
        }
        Role::StructuralEngineer => {
            "Foundation strip 600 x 300 mm is adequate for the stated loads.\n\
             C25/30 is sufficient for the bearing capacity, cover 30 mm.\n\
             Confidence: 75%"
        }
        Role::ConcreteSpecialist => {
            "For exposure XC2/XA1 the minimum is C30/37 with nominal cover 35 mm.\n\
             WARNING: Confirm groundwater sulphate content\n\
             Confidence: 80%"
        }
        Role::StandardsChecker => {
            "ČSN EN 206+A2 Table F.1 requires C30/37 for XA1; cover 35 mm per EN 1992-1-1 4.4.1.\n\
             Confidence: 85%"
        }
        Role::CostEstimator => {
            "OTSKP 272325: Foundation walls of reinforced concrete C30/37, \
             indicative 3 200 to 3 900 CZK/m³.\n\
             Confidence: 60%"
        }
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, prompt: &str, _temperature: f64) -> Result<Completion, GatewayError> {
        let reply = self.reply_for(prompt);
        Ok(Completion::new(reply, reply.split_whitespace().count() as u64))
    }
}
