//! Identifier removal from file names.

use crate::GuidPattern;
use crate::RenameFailure;
use crate::Reporter;
use crate::Result;
use crate::SanitizeError;
use crate::SanitizeReport;
use crate::walker::collect_files;
use std::fs;
use std::path::Path;

/// Renames every file below `root` whose base name contains identifiers.
///
/// The file list is collected before the first rename. Directory names are
/// left alone; only the final path component changes.
///
/// # Errors
///
/// Returns `SanitizeError::Rename` if a sanitized name is empty, if the
/// sanitized path already exists (no file is ever overwritten), or if the
/// filesystem rename fails. Files renamed before the failure stay renamed.
pub fn sanitize_names(
    root: &Path,
    patterns: &GuidPattern,
    report: &mut SanitizeReport,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let files = collect_files(root)?;

    for file in &files {
        // Names extracted from zip entries are always valid UTF-8.
        let Some(name) = file.path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let (sanitized, removed) = patterns.strip_name(name);
        if removed == 0 {
            continue;
        }

        let target = file.path.with_file_name(&*sanitized);

        if sanitized.is_empty() {
            return Err(SanitizeError::Rename {
                from: file.path.clone(),
                to: target,
                reason: RenameFailure::EmptyName,
            });
        }

        if fs::symlink_metadata(&target).is_ok() {
            return Err(SanitizeError::Rename {
                from: file.path.clone(),
                to: target,
                reason: RenameFailure::Collision,
            });
        }

        fs::rename(&file.path, &target).map_err(|e| SanitizeError::Rename {
            from: file.path.clone(),
            to: target.clone(),
            reason: RenameFailure::Io(e),
        })?;

        report.files_renamed += 1;
        report.name_identifiers_removed += removed;
        reporter.on_rename(
            &file.relative_path,
            &file.relative_path.with_file_name(&*sanitized),
        );
    }

    Ok(())
}
