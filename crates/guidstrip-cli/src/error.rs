//! Error conversion utilities for CLI.
//!
//! Converts guidstrip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use guidstrip_core::RenameFailure;
use guidstrip_core::SanitizeError;
use std::path::Path;

/// Converts `SanitizeError` to user-friendly anyhow error with context
pub fn convert_sanitize_error(err: SanitizeError, solution: &Path) -> anyhow::Error {
    match err {
        SanitizeError::SourceNotFound { path } => {
            anyhow!(
                "Solution archive not found: {}\n\
                 HINT: Check the path; relative paths resolve against the current directory.",
                path.display()
            )
        }
        SanitizeError::CorruptArchive { path, reason } => {
            anyhow!(
                "Invalid solution archive '{}': {}\n\
                 HINT: The file must be a zip export of the solution.",
                path.display(),
                reason
            )
        }
        SanitizeError::Workspace { path, source } => {
            anyhow!(
                "Cannot create workspace '{}': {}\n\
                 HINT: Use --workspace-root to pick a writable directory.",
                path.display(),
                source
            )
        }
        SanitizeError::Extraction { path, source } => {
            anyhow!(
                "Cannot extract '{}' from '{}': {}\n\
                 HINT: The archive may hold a file and a folder with the same name.",
                path.display(),
                solution.display(),
                source
            )
        }
        SanitizeError::Rename {
            from,
            to,
            reason: RenameFailure::Collision,
        } => {
            anyhow!(
                "Cannot rename '{}' in '{}': '{}' already exists\n\
                 HINT: Two entries differ only by their GUID; the solution cannot be sanitized without losing one of them.",
                from.display(),
                solution.display(),
                to.display()
            )
        }
        SanitizeError::Rename {
            from,
            reason: RenameFailure::EmptyName,
            ..
        } => {
            anyhow!(
                "Cannot rename '{}' in '{}': the name consists only of a GUID",
                from.display(),
                solution.display()
            )
        }
        SanitizeError::ContentRewrite { path, source } => {
            anyhow!(
                "Cannot rewrite markup file '{}': {}\n\
                 HINT: Markup files must be UTF-8; use --markup-extension to select other files.",
                path.display(),
                source
            )
        }
        SanitizeError::Cleanup { path, source } => {
            anyhow!(
                "Cleaned archive was built, but '{}' could not be removed: {}\n\
                 HINT: Remove the workspace directory manually.",
                path.display(),
                source
            )
        }
        SanitizeError::InvalidConfig { reason } => {
            anyhow!("Invalid options: {reason}")
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error sanitizing solution '{}'", solution.display())),
    }
}

/// Adds context to a sanitization result.
pub fn add_solution_context<T>(
    result: Result<T, SanitizeError>,
    solution: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_sanitize_error(e, solution))
}
