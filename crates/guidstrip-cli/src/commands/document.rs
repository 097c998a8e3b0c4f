//! Document command implementation.

use super::run_pipeline;
use crate::cli::DocumentArgs;
use crate::generator::GeneratorInvocation;
use crate::output::OutputFormatter;
use anyhow::Result;

pub fn execute(args: &DocumentArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let config = args.sanitize.to_config();
    let report = run_pipeline(&args.sanitize.solution, &config, quiet)?;

    let invocation = GeneratorInvocation::new(
        &args.generator,
        &report.output_path,
        &args.output,
        args.base_dir.as_deref(),
    );
    invocation.run()?;
    tracing::debug!(archive = %invocation.archive().display(), "Generator consumed archive");

    formatter.format_document_result(&report, &args.output)?;

    Ok(())
}
