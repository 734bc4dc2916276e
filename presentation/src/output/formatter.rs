//! Output formatter trait

use council_domain::FinalOutput;

/// Trait for formatting council results
pub trait OutputFormatter {
    /// Format the complete result
    fn format(&self, result: &FinalOutput) -> String;

    /// Format as JSON
    fn format_json(&self, result: &FinalOutput) -> String;

    /// Format the designated answer only (concise output)
    fn format_answer_only(&self, result: &FinalOutput) -> String;
}
