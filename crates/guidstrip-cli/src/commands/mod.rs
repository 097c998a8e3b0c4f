//! Subcommand implementations.

pub mod clean;
pub mod completion;
pub mod document;

use crate::error::add_solution_context;
use crate::progress::CliProgress;
use anyhow::Result;
use guidstrip_core::SanitizeConfig;
use guidstrip_core::SanitizeReport;
use guidstrip_core::TracingReporter;
use guidstrip_core::sanitize_solution_with_reporter;
use std::path::Path;

/// Runs the pipeline, with a spinner when stdout is a terminal.
pub fn run_pipeline(solution: &Path, config: &SanitizeConfig, quiet: bool) -> Result<SanitizeReport> {
    let result = if !quiet && CliProgress::should_show() {
        let mut progress = CliProgress::new();
        sanitize_solution_with_reporter(solution, config, &mut progress)
    } else {
        sanitize_solution_with_reporter(solution, config, &mut TracingReporter)
    };
    add_solution_context(result, solution)
}
