//! Pipeline orchestration.
//!
//! A run moves through a fixed sequence of states:
//!
//! ```text
//! Created → Extracted → Renamed → Sanitized → Packaged → Cleaned → Done
//! ```
//!
//! Any failing step moves the pipeline to `Failed` instead. Nothing is
//! rolled back: the workspace keeps whatever the failing step left behind.

use crate::GuidPattern;
use crate::Reporter;
use crate::Result;
use crate::SanitizeConfig;
use crate::SanitizeError;
use crate::SanitizeReport;
use crate::Workspace;
use crate::content::sanitize_markup;
use crate::extract::extract_archive;
use crate::pack::build_output_archive;
use crate::rename::sanitize_names;
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// State of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Configuration validated, nothing on disk yet.
    Created,
    /// Workspace exists and holds the extracted entries.
    Extracted,
    /// All file names are sanitized.
    Renamed,
    /// All markup content is sanitized.
    Sanitized,
    /// Output archive is written.
    Packaged,
    /// Extracted entries are removed.
    Cleaned,
    /// Run finished successfully.
    Done,
    /// A step failed.
    Failed,
}

impl PipelineStage {
    /// Returns the state that follows on success, `None` for terminal states.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Created => Some(Self::Extracted),
            Self::Extracted => Some(Self::Renamed),
            Self::Renamed => Some(Self::Sanitized),
            Self::Sanitized => Some(Self::Packaged),
            Self::Packaged => Some(Self::Cleaned),
            Self::Cleaned => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    /// Returns `true` for `Done` and `Failed`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Extracted => "extracted",
            Self::Renamed => "renamed",
            Self::Sanitized => "sanitized",
            Self::Packaged => "packaged",
            Self::Cleaned => "cleaned",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Unit of work that moves the pipeline from one state to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Create the workspace and unpack the source archive.
    Extract,
    /// Strip identifiers from file names.
    Rename,
    /// Strip identifiers from markup content.
    Rewrite,
    /// Build the output archive.
    Package,
    /// Remove extracted entries.
    Sweep,
}

impl Step {
    /// All steps in execution order.
    pub const ALL: [Self; 5] = [
        Self::Extract,
        Self::Rename,
        Self::Rewrite,
        Self::Package,
        Self::Sweep,
    ];

    /// State the pipeline is in once this step succeeded.
    #[must_use]
    pub const fn target(self) -> PipelineStage {
        match self {
            Self::Extract => PipelineStage::Extracted,
            Self::Rename => PipelineStage::Renamed,
            Self::Rewrite => PipelineStage::Sanitized,
            Self::Package => PipelineStage::Packaged,
            Self::Sweep => PipelineStage::Cleaned,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Extract => "extract",
            Self::Rename => "rename",
            Self::Rewrite => "rewrite",
            Self::Package => "package",
            Self::Sweep => "sweep",
        };
        f.write_str(name)
    }
}

/// Single-use sanitization pipeline.
///
/// # Examples
///
/// ```no_run
/// use guidstrip_core::NoopReporter;
/// use guidstrip_core::Pipeline;
/// use guidstrip_core::PipelineStage;
/// use guidstrip_core::SanitizeConfig;
/// use std::path::Path;
///
/// let mut pipeline = Pipeline::new(SanitizeConfig::default())?;
/// match pipeline.run(Path::new("solution.zip"), &mut NoopReporter) {
///     Ok(report) => println!("{}", report.output_path.display()),
///     Err(err) => {
///         assert_eq!(pipeline.stage(), PipelineStage::Failed);
///         if let Some(workspace) = pipeline.workspace() {
///             eprintln!("left for inspection: {}", workspace.root().display());
///         }
///         return Err(err);
///     }
/// }
/// # Ok::<(), guidstrip_core::SanitizeError>(())
/// ```
#[derive(Debug)]
pub struct Pipeline {
    config: SanitizeConfig,
    patterns: GuidPattern,
    stage: PipelineStage,
    workspace: Option<Workspace>,
}

impl Pipeline {
    /// Validates `config` and compiles the identifier expressions.
    ///
    /// # Errors
    ///
    /// Returns `SanitizeError::InvalidConfig` for an unusable configuration.
    pub fn new(config: SanitizeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            patterns: GuidPattern::new()?,
            stage: PipelineStage::Created,
            workspace: None,
        })
    }

    /// Current state.
    #[must_use]
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Workspace of this run, once it has been created.
    #[must_use]
    pub fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    /// Runs every step against `source`.
    ///
    /// Errors are passed to `reporter.on_error` where they occur and then
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error of any step, or
    /// `SanitizeError::PipelineReused` when called a second time.
    pub fn run(&mut self, source: &Path, reporter: &mut dyn Reporter) -> Result<SanitizeReport> {
        if self.stage != PipelineStage::Created {
            return Err(SanitizeError::PipelineReused { stage: self.stage });
        }

        let start = Instant::now();
        let mut report = SanitizeReport::new();

        reporter.on_step_start(Step::Extract);
        let workspace = self.settle(Step::Extract, Workspace::create(&self.config), reporter)?;
        self.workspace = Some(workspace.clone());
        reporter.on_workspace_created(workspace.root());
        report.workspace = workspace.root().to_path_buf();
        report.output_path = workspace.output_path().to_path_buf();

        let result = extract_archive(source, workspace.staging_dir(), &mut report, reporter);
        self.settle(Step::Extract, result, reporter)?;
        reporter.on_step_complete(Step::Extract, report.files_extracted);

        reporter.on_step_start(Step::Rename);
        let result = sanitize_names(
            workspace.staging_dir(),
            &self.patterns,
            &mut report,
            reporter,
        );
        self.settle(Step::Rename, result, reporter)?;
        reporter.on_step_complete(Step::Rename, report.files_renamed);

        reporter.on_step_start(Step::Rewrite);
        let result = sanitize_markup(
            workspace.staging_dir(),
            &self.patterns,
            &self.config.markup_extension,
            &mut report,
            reporter,
        );
        self.settle(Step::Rewrite, result, reporter)?;
        reporter.on_step_complete(Step::Rewrite, report.markup_files_rewritten);

        reporter.on_step_start(Step::Package);
        let result = build_output_archive(&workspace, &self.config, &mut report, reporter);
        self.settle(Step::Package, result, reporter)?;
        reporter.on_step_complete(Step::Package, report.entries_packed);

        reporter.on_step_start(Step::Sweep);
        let result = workspace.sweep(&mut report, reporter);
        self.settle(Step::Sweep, result, reporter)?;
        reporter.on_step_complete(Step::Sweep, report.files_removed);

        self.stage = PipelineStage::Done;
        report.duration = start.elapsed();
        reporter.on_complete(&report.output_path);

        Ok(report)
    }

    /// Moves to the step's target state on success, to `Failed` otherwise.
    ///
    /// `Extract` settles twice (workspace creation, then extraction); the
    /// transition check accepts the repeat.
    fn settle<T>(&mut self, step: Step, result: Result<T>, reporter: &mut dyn Reporter) -> Result<T> {
        match result {
            Ok(value) => {
                debug_assert!(
                    self.stage.next() == Some(step.target()) || self.stage == step.target(),
                    "out-of-order transition from {} via {step}",
                    self.stage
                );
                self.stage = step.target();
                Ok(value)
            }
            Err(err) => {
                reporter.on_error(step, &err);
                self.stage = PipelineStage::Failed;
                Err(err)
            }
        }
    }
}
