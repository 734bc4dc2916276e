//! Progress reporting for council runs

use colored::Colorize;
use council_application::ProgressNotifier;
use council_domain::{ExecutionMode, FinalOutput, Role};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a council run with a progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    run_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            run_bar: Mutex::new(None),
        }
    }

    fn run_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn mode_display_name(mode: ExecutionMode) -> &'static str {
        match mode {
            ExecutionMode::Sequential => "Consulting roles (sequential)",
            ExecutionMode::Parallel => "Consulting roles (parallel)",
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.run_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_roles: usize, mode: ExecutionMode) {
        let pb = self.multi.add(ProgressBar::new(total_roles as u64));
        pb.set_style(Self::run_style());
        pb.set_prefix(Self::mode_display_name(mode));
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.run_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_role_start(&self, role: Role) {
        self.with_bar(|pb| pb.set_message(format!("{} ...", role)));
    }

    fn on_role_complete(&self, role: Role, success: bool) {
        self.with_bar(|pb| {
            let status = if success {
                format!("{} {}", "v".green(), role)
            } else {
                format!("{} {}", "x".red(), role)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_conflicts_resolved(&self, count: usize) {
        if count > 0 {
            self.with_bar(|pb| pb.set_message(format!("{} conflict(s) resolved", count)));
        }
    }

    fn on_run_complete(&self, output: &FinalOutput) {
        if let Ok(mut guard) = self.run_bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(format!(
                "{} ({})",
                "Council complete!".green(),
                output.status()
            ));
        }
    }
}

/// Simple text-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_run_start(&self, total_roles: usize, mode: ExecutionMode) {
        eprintln!(
            "{} {} ({} roles)",
            "->".cyan(),
            ProgressReporter::mode_display_name(mode).bold(),
            total_roles
        );
    }

    fn on_role_start(&self, _role: Role) {}

    fn on_role_complete(&self, role: Role, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), role);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), role);
        }
    }

    fn on_conflicts_resolved(&self, count: usize) {
        if count > 0 {
            eprintln!("  {} {} conflict(s) resolved", "!".yellow(), count);
        }
    }

    fn on_run_complete(&self, _output: &FinalOutput) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display_names() {
        assert!(ProgressReporter::mode_display_name(ExecutionMode::Parallel).contains("parallel"));
        assert!(
            ProgressReporter::mode_display_name(ExecutionMode::Sequential).contains("sequential")
        );
    }

    #[test]
    fn test_simple_progress_handles_run_events() {
        let progress: &dyn ProgressNotifier = &SimpleProgress;
        progress.on_run_start(2, ExecutionMode::Sequential);
        progress.on_role_start(Role::StructuralEngineer);
        progress.on_role_complete(Role::StructuralEngineer, true);
        progress.on_role_complete(Role::CostEstimator, false);
        progress.on_conflicts_resolved(1);
    }
}
