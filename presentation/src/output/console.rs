//! Console output formatter for classifications and council results

use crate::output::formatter::OutputFormatter;
use chrono::{DateTime, Local};
use colored::Colorize;
use council_domain::{FinalOutput, OutputStatus, Question, TaskClassification};

/// Formats council results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a classification
    pub fn format_classification(question: &Question, classification: &TaskClassification) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Task Classification"));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Question:".cyan().bold(), question));
        output.push_str(&format!(
            "{} {}\n",
            "Complexity:".cyan().bold(),
            classification.complexity.as_str()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Domains:".cyan().bold(),
            classification
                .domains
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        output.push_str(&format!(
            "{} {:.2}\n",
            "Confidence:".cyan().bold(),
            classification.confidence
        ));

        output.push_str(&Self::section_header("Roles"));
        for invocation in classification.roles_ordered() {
            output.push_str(&format!(
                "  {}. {} (temperature {:.2})\n",
                invocation.priority() + 1,
                invocation.role().to_string().yellow().bold(),
                invocation.temperature()
            ));
        }

        if classification.requires_rfi {
            output.push_str(&Self::section_header("Request for Information"));
            for item in &classification.missing_data {
                output.push_str(&format!("  {} {}\n", "?".yellow().bold(), item));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a classification as JSON
    pub fn format_classification_json(classification: &TaskClassification) -> String {
        serde_json::to_string_pretty(classification).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the complete council result
    pub fn format(result: &FinalOutput) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Role Council Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}    {} {}\n",
            "Complexity:".cyan().bold(),
            result.complexity.as_str(),
            "Mode:".cyan().bold(),
            result.execution_mode
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Roles consulted:".cyan().bold(),
            result
                .roles_consulted
                .iter()
                .map(|r| r.display_name())
                .collect::<Vec<_>>()
                .join(", ")
        ));

        // Role outputs
        output.push_str(&Self::section_header("Role Outputs"));
        for role_output in &result.outputs {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                format!("── {} ──", role_output.role).yellow().bold(),
                format!(
                    "[{} | t={:.2} | {} tokens | {} ms]",
                    Self::clock(role_output.timestamp),
                    role_output.temperature_used,
                    role_output.tokens_used,
                    role_output.elapsed_ms
                )
                .dimmed(),
                role_output.text.trim_end()
            ));
        }
        for failure in &result.failures {
            output.push_str(&format!(
                "\n{}\nError: {}\n",
                format!("── {} ──", failure.role).red().bold(),
                failure.message
            ));
        }

        // Conflicts
        if !result.conflicts.is_empty() {
            output.push_str(&Self::section_header("Conflicts"));
            for conflict in &result.conflicts {
                output.push_str(&format!(
                    "\n{}\n",
                    conflict.conflict_type.display_name().magenta().bold()
                ));
                for description in &conflict.descriptions {
                    output.push_str(&format!("  * {}\n", description));
                }
                output.push_str(&format!("  {} {}\n", "->".green(), conflict.resolution));
            }
        }

        if !result.warnings.is_empty() {
            output.push_str(&format!("\n{}\n", "Warnings:".yellow().bold()));
            for warning in &result.warnings {
                output.push_str(&format!("  * {}\n", warning));
            }
        }

        if !result.critical_issues.is_empty() {
            output.push_str(&format!("\n{}\n", "Critical Issues:".red().bold()));
            for issue in &result.critical_issues {
                output.push_str(&format!("  * {}\n", issue));
            }
        }

        if !result.missing_data.is_empty() {
            output.push_str(&format!("\n{}\n", "Missing Data:".yellow().bold()));
            for item in &result.missing_data {
                output.push_str(&format!("  ? {}\n", item));
            }
        }

        // Answer
        output.push_str(&Self::section_header("Answer"));
        output.push_str(&format!("\n{}\n", Self::answer_text(result)));

        // Summary
        output.push_str(&format!(
            "\n{} {}  {} {:.2}  {} {}  {} {} ms",
            "Status:".cyan().bold(),
            Self::status_label(result.status()),
            "Confidence:".cyan().bold(),
            result.confidence,
            "Tokens:".cyan().bold(),
            result.total_tokens,
            "Time:".cyan().bold(),
            result.execution_time_ms
        ));
        if let Some(speedup) = result.parallel_speedup {
            output.push_str(&format!("  {} {:.1}x", "Speedup:".cyan().bold(), speedup));
        }
        output.push('\n');

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &FinalOutput) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the designated answer only (concise output)
    pub fn format_answer_only(result: &FinalOutput) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n\n",
            "=== Council Answer ===".cyan().bold(),
            Self::status_label(result.status())
        ));

        output.push_str(&Self::answer_text(result));
        output.push('\n');

        if !result.critical_issues.is_empty() {
            output.push('\n');
            for issue in &result.critical_issues {
                output.push_str(&format!("{} {}\n", "!".red().bold(), issue));
            }
        }

        output
    }

    fn answer_text(result: &FinalOutput) -> String {
        if result.all_roles_failed() {
            "No role produced an answer.".to_string()
        } else {
            result.answer.trim_end().to_string()
        }
    }

    fn status_label(status: OutputStatus) -> String {
        match status {
            OutputStatus::Ok => status.as_str().green().bold().to_string(),
            OutputStatus::Warnings => status.as_str().yellow().bold().to_string(),
            OutputStatus::CriticalIssues => status.as_str().red().bold().to_string(),
        }
    }

    fn clock(timestamp_ms: u64) -> String {
        DateTime::from_timestamp_millis(timestamp_ms as i64)
            .map(|utc| utc.with_timezone(&Local).format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &FinalOutput) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &FinalOutput) -> String {
        Self::format_json(result)
    }

    fn format_answer_only(&self, result: &FinalOutput) -> String {
        Self::format_answer_only(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{
        ConflictResolver, ExecutionMode, Role, RoleFailure, RoleOutput, TaskClassifier,
        TaskComplexity,
    };

    fn result() -> FinalOutput {
        let outputs = vec![
            RoleOutput::new(Role::StructuralEngineer, "C25/30 is sufficient", 0.3, 120),
            RoleOutput::new(Role::ConcreteSpecialist, "C30/37 required", 0.3, 80),
        ];
        FinalOutput {
            answer: "C30/37 required".to_string(),
            complexity: TaskComplexity::Standard,
            execution_mode: ExecutionMode::Parallel,
            roles_consulted: vec![Role::StructuralEngineer, Role::ConcreteSpecialist],
            conflicts: ConflictResolver::default().resolve(&outputs),
            outputs,
            warnings: vec!["Check exposure".to_string()],
            critical_issues: vec![],
            failures: vec![],
            missing_data: vec![],
            total_tokens: 200,
            execution_time_ms: 1500,
            confidence: 0.8,
            parallel_speedup: Some(1.9),
        }
    }

    #[test]
    fn test_full_format_lists_roles_conflicts_and_answer() {
        let text = ConsoleFormatter::format(&result());

        assert!(text.contains("Structural Engineer"));
        assert!(text.contains("C25/30 is sufficient"));
        assert!(text.contains("Concrete strength class"));
        assert!(text.contains("Check exposure"));
        assert!(text.contains("WARNINGS"));
        assert!(text.contains("1.9x"));
    }

    #[test]
    fn test_answer_only() {
        let text = ConsoleFormatter::format_answer_only(&result());
        assert!(text.contains("C30/37 required"));
        assert!(!text.contains("C25/30 is sufficient"));
    }

    #[test]
    fn test_answer_only_when_every_role_failed() {
        let mut failed = result();
        failed.outputs.clear();
        failed.roles_consulted.clear();
        failed.answer.clear();
        let failure = RoleFailure::invocation(Role::StructuralEngineer, "timeout");
        failed.critical_issues = vec![failure.as_issue()];
        failed.failures = vec![failure];

        let text = ConsoleFormatter::format_answer_only(&failed);

        assert!(text.contains("No role produced an answer."));
        assert!(text.contains("[Structural Engineer] Agent call failed: timeout"));
    }

    #[test]
    fn test_json_is_parseable() {
        let json = ConsoleFormatter::format_json(&result());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["execution_mode"], "parallel");
        assert_eq!(value["conflicts"][0]["conflict_type"], "material_class");
    }

    #[test]
    fn test_classification_lists_rfi() {
        let question = Question::new("Design a foundation for a house");
        let classification = TaskClassifier::new().classify(&question, None);

        let text = ConsoleFormatter::format_classification(&question, &classification);

        assert!(text.contains("Request for Information"));
        assert!(text.contains("Dimensions"));
    }
}
