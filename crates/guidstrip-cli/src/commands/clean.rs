//! Clean command implementation.

use super::run_pipeline;
use crate::cli::CleanArgs;
use crate::output::OutputFormatter;
use anyhow::Result;

pub fn execute(args: &CleanArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let config = args.sanitize.to_config();
    let report = run_pipeline(&args.sanitize.solution, &config, quiet)?;

    if !report.has_changes() {
        formatter.format_warning("no GUIDs found; the cleaned archive matches the input");
    }
    formatter.format_clean_result(&report)?;

    Ok(())
}
