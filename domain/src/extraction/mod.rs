//! Best-effort structured extraction from free-text role outputs.
//!
//! Role outputs are free text. Everything the orchestrator needs from them
//! (confidence, warnings, critical issues) goes through the
//! [`OutputExtractor`] trait, so a stricter structured-output contract can
//! replace [`PatternExtractor`] without touching orchestration.
//!
//! Finding nothing means "no evidence": `None` / empty lists, never zero.

mod parsing;

pub use parsing::{PatternExtractor, parse_confidence, parse_critical_issues, parse_warnings};

/// Structured signals pulled out of one role output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub confidence: Option<f64>,
    pub warnings: Vec<String>,
    pub critical_issues: Vec<String>,
}

/// Extracts structured signals from a role's free-text answer
pub trait OutputExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Extraction;
}
