//! Progress spinner for CLI runs.

use console::Term;
use guidstrip_core::Reporter;
use guidstrip_core::SanitizeError;
use guidstrip_core::Step;
use guidstrip_core::TracingReporter;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::path::Path;
use std::time::Duration;

/// Spinner that shows the current step and entry count.
///
/// Every event is also forwarded to a [`TracingReporter`]; log lines are
/// printed through the spinner so they do not tear it. Cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    inner: TracingReporter,
    entries: u64,
}

impl CliProgress {
    /// Creates a new spinner.
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        // Template: "⠋ rename [12 entries] Workflows/Flow.json"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {prefix:.bold} [{pos} entries] {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            bar,
            inner: TracingReporter,
            entries: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    fn advance(&mut self, path: &Path) {
        self.entries += 1;
        self.bar.set_position(self.entries);
        self.bar.set_message(path.display().to_string());
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl Reporter for CliProgress {
    fn on_workspace_created(&mut self, root: &Path) {
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.on_workspace_created(root));
    }

    fn on_step_start(&mut self, step: Step) {
        self.entries = 0;
        self.bar.set_prefix(step.to_string());
        self.bar.set_position(0);
        self.bar.set_message("");
        self.inner.on_step_start(step);
    }

    fn on_entry(&mut self, step: Step, path: &Path) {
        self.advance(path);
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.on_entry(step, path));
    }

    fn on_rename(&mut self, from: &Path, to: &Path) {
        self.advance(to);
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.on_rename(from, to));
    }

    fn on_step_complete(&mut self, step: Step, entries: usize) {
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.on_step_complete(step, entries));
    }

    fn on_error(&mut self, step: Step, error: &SanitizeError) {
        self.bar.abandon();
        self.inner.on_error(step, error);
    }

    fn on_complete(&mut self, output: &Path) {
        self.bar.finish_and_clear();
        self.inner.on_complete(output);
    }
}
