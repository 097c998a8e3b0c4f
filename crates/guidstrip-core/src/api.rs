//! High-level public API for solution sanitization.

use std::path::Path;

use crate::NoopReporter;
use crate::Pipeline;
use crate::Reporter;
use crate::Result;
use crate::SanitizeConfig;
use crate::SanitizeReport;

/// Sanitizes a zipped solution and returns the location of the cleaned copy.
///
/// The archive is extracted into a fresh workspace below
/// `config.workspace_root`, identifiers are stripped from file names and
/// markup content, and the result is packed into `report.output_path`.
/// The source archive is never modified.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The source archive is missing or corrupt
/// - A sanitized file name collides with an existing file
/// - Any filesystem operation in the workspace fails
///
/// On error the workspace is left in place for inspection.
///
/// # Examples
///
/// ```no_run
/// use guidstrip_core::SanitizeConfig;
/// use guidstrip_core::sanitize_solution;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = sanitize_solution("solution.zip", &SanitizeConfig::default())?;
/// println!("Cleaned solution at {}", report.output_path.display());
/// # Ok(())
/// # }
/// ```
pub fn sanitize_solution<P: AsRef<Path>>(
    source: P,
    config: &SanitizeConfig,
) -> Result<SanitizeReport> {
    sanitize_solution_with_reporter(source, config, &mut NoopReporter)
}

/// Sanitizes a zipped solution, sending pipeline events to `reporter`.
///
/// # Errors
///
/// Same as [`sanitize_solution`].
///
/// # Examples
///
/// ```no_run
/// use guidstrip_core::SanitizeConfig;
/// use guidstrip_core::TracingReporter;
/// use guidstrip_core::sanitize_solution_with_reporter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SanitizeConfig::default().with_workspace_root("/tmp/guidstrip");
/// let report = sanitize_solution_with_reporter("solution.zip", &config, &mut TracingReporter)?;
/// println!("Removed {} identifiers", report.identifiers_removed());
/// # Ok(())
/// # }
/// ```
pub fn sanitize_solution_with_reporter<P: AsRef<Path>>(
    source: P,
    config: &SanitizeConfig,
    reporter: &mut dyn Reporter,
) -> Result<SanitizeReport> {
    let mut pipeline = Pipeline::new(config.clone())?;
    pipeline.run(source.as_ref(), reporter)
}
