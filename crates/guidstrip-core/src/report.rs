//! Run statistics and the reporting interface.

use crate::SanitizeError;
use crate::Step;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Report of a completed sanitization run.
///
/// Contains the output archive location and per-step statistics.
#[derive(Debug, Clone, Default)]
pub struct SanitizeReport {
    /// Path of the cleaned archive. Never escaped or quoted.
    pub output_path: PathBuf,

    /// Workspace directory that holds the cleaned archive.
    pub workspace: PathBuf,

    /// Number of files extracted from the source archive.
    pub files_extracted: usize,

    /// Number of directories created during extraction.
    pub directories_created: usize,

    /// Number of files whose name changed.
    pub files_renamed: usize,

    /// Number of markup files inspected for identifiers.
    pub markup_files_scanned: usize,

    /// Number of markup files whose content changed.
    pub markup_files_rewritten: usize,

    /// Identifiers removed from file names.
    pub name_identifiers_removed: usize,

    /// Identifiers removed from markup content.
    pub content_identifiers_removed: usize,

    /// Number of entries written to the output archive.
    pub entries_packed: usize,

    /// Uncompressed bytes written to the output archive.
    pub bytes_packed: u64,

    /// Number of extracted files removed by the sweep.
    pub files_removed: usize,

    /// Number of directories removed by the sweep.
    pub directories_removed: usize,

    /// Duration of the whole run.
    pub duration: Duration,
}

impl SanitizeReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of identifiers removed.
    #[must_use]
    pub fn identifiers_removed(&self) -> usize {
        self.name_identifiers_removed + self.content_identifiers_removed
    }

    /// Returns whether anything in the archive was changed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.files_renamed > 0 || self.markup_files_rewritten > 0
    }
}

/// Receives pipeline events.
///
/// Every component gets the reporter passed in explicitly; the library never
/// writes to global logging state on its own.
///
/// # Examples
///
/// ```
/// use guidstrip_core::Reporter;
/// use guidstrip_core::SanitizeError;
/// use guidstrip_core::Step;
/// use std::path::Path;
///
/// struct Printer;
///
/// impl Reporter for Printer {
///     fn on_workspace_created(&mut self, root: &Path) {
///         println!("workspace: {}", root.display());
///     }
///
///     fn on_step_start(&mut self, step: Step) {
///         println!("{step}...");
///     }
///
///     fn on_entry(&mut self, _step: Step, _path: &Path) {}
///
///     fn on_rename(&mut self, from: &Path, to: &Path) {
///         println!("{} -> {}", from.display(), to.display());
///     }
///
///     fn on_step_complete(&mut self, _step: Step, _entries: usize) {}
///
///     fn on_error(&mut self, step: Step, error: &SanitizeError) {
///         eprintln!("{step} failed: {error}");
///     }
///
///     fn on_complete(&mut self, output: &Path) {
///         println!("done: {}", output.display());
///     }
/// }
/// ```
pub trait Reporter: Send {
    /// Called once the workspace directory exists.
    fn on_workspace_created(&mut self, root: &Path);

    /// Called before a step touches the first entry.
    fn on_step_start(&mut self, step: Step);

    /// Called after a step finished with one entry.
    ///
    /// # Arguments
    ///
    /// * `step` - Step that processed the entry
    /// * `path` - Entry path relative to the extracted tree
    fn on_entry(&mut self, step: Step, path: &Path);

    /// Called after a file was renamed. Both paths are relative to the
    /// extracted tree.
    fn on_rename(&mut self, from: &Path, to: &Path);

    /// Called after a step finished successfully.
    fn on_step_complete(&mut self, step: Step, entries: usize);

    /// Called where an error originates, before it is returned.
    fn on_error(&mut self, step: Step, error: &SanitizeError);

    /// Called once the output archive is complete and the workspace swept.
    fn on_complete(&mut self, output: &Path);
}

/// Reporter that discards every event.
#[derive(Debug, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn on_workspace_created(&mut self, _root: &Path) {}

    fn on_step_start(&mut self, _step: Step) {}

    fn on_entry(&mut self, _step: Step, _path: &Path) {}

    fn on_rename(&mut self, _from: &Path, _to: &Path) {}

    fn on_step_complete(&mut self, _step: Step, _entries: usize) {}

    fn on_error(&mut self, _step: Step, _error: &SanitizeError) {}

    fn on_complete(&mut self, _output: &Path) {}
}

/// Reporter that forwards events to `tracing`.
///
/// Per-entry events are emitted at `debug`, renames and step summaries at
/// `info`, failures at `error`.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn on_workspace_created(&mut self, root: &Path) {
        tracing::info!(workspace = %root.display(), "Created workspace");
    }

    fn on_step_start(&mut self, step: Step) {
        tracing::debug!(%step, "Step started");
    }

    fn on_entry(&mut self, step: Step, path: &Path) {
        tracing::debug!(%step, path = %path.display(), "Processed entry");
    }

    fn on_rename(&mut self, from: &Path, to: &Path) {
        tracing::info!(from = %from.display(), to = %to.display(), "Renamed file");
    }

    fn on_step_complete(&mut self, step: Step, entries: usize) {
        tracing::info!(%step, entries, "Step complete");
    }

    fn on_error(&mut self, step: Step, error: &SanitizeError) {
        tracing::error!(%step, error = %error, "Step failed");
    }

    fn on_complete(&mut self, output: &Path) {
        tracing::info!(output = %output.display(), "Created cleaned solution archive");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report() {
        let report = SanitizeReport::new();
        assert_eq!(report.files_extracted, 0);
        assert_eq!(report.entries_packed, 0);
        assert_eq!(report.identifiers_removed(), 0);
        assert!(!report.has_changes());
    }

    #[test]
    fn test_identifiers_removed() {
        let mut report = SanitizeReport::new();
        report.name_identifiers_removed = 2;
        report.content_identifiers_removed = 5;
        assert_eq!(report.identifiers_removed(), 7);
    }

    #[test]
    fn test_has_changes() {
        let mut report = SanitizeReport::new();
        report.markup_files_rewritten = 1;
        assert!(report.has_changes());
    }

    #[test]
    fn test_tracing_reporter_without_subscriber() {
        let mut reporter = TracingReporter;
        reporter.on_step_start(Step::Extract);
        reporter.on_rename(Path::new("a-x.xml"), Path::new("a.xml"));
        reporter.on_step_complete(Step::Extract, 3);
        reporter.on_complete(Path::new("temp/x/cleanedSolution.zip"));
    }
}
