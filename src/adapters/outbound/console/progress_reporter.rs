use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

const PROGRESS_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with descriptors written to
/// stdout by scripts. In verbose mode every class is logged on its own line
/// instead of driving the progress bar.
pub struct StderrProgressReporter {
    verbose: bool,
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            progress_bar: RefCell::new(None),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    /// Prints above the progress bar when one is active
    fn print_line(&self, line: String) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print_line(message.to_string());
    }

    fn report_debug(&self, message: &str) {
        if self.verbose {
            self.print_line(format!("   {}", message.dimmed()));
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.verbose {
            if let Some(msg) = message {
                eprintln!("   [{}/{}] {}", current, total, msg);
            }
            return;
        }

        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_progress_bar();
        }
    }

    fn report_warning(&self, message: &str) {
        self.print_line(format!("{} {}", "⚠️  Warning:".yellow().bold(), message));
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{} {}", "❌ Error:".red().bold(), message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("{}", message.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new(false);
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_progress(1, 2, Some("a.Impl"));
        reporter.report_warning("Test warning");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_bar_is_released_when_finished() {
        let reporter = StderrProgressReporter::new(false);
        reporter.report_progress(1, 2, Some("a.One"));
        assert!(reporter.progress_bar.borrow().is_some());

        reporter.report_progress(2, 2, Some("a.Two"));
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_verbose_mode_never_creates_progress_bar() {
        let reporter = StderrProgressReporter::new(true);
        reporter.report_debug("detail");
        reporter.report_progress(1, 3, Some("a.Impl"));
        assert!(reporter.progress_bar.borrow().is_none());
        assert!(reporter.is_verbose());
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        assert!(!reporter.is_verbose());
        reporter.report_debug("hidden");
    }
}
