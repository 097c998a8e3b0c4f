//! Snapshot traversal of extracted trees.
//!
//! Every step that mutates the tree first collects the complete list of
//! entries and only then starts renaming, rewriting or deleting. Walking live
//! directory state while renaming could skip entries or visit them twice.

use crate::Result;
use crate::SanitizeError;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A non-directory entry found below a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Full filesystem path (the root joined with `relative_path`).
    pub path: PathBuf,

    /// Path relative to the walked root.
    pub relative_path: PathBuf,
}

/// Collects every non-directory entry below `root`, sorted by path.
///
/// The root itself is never returned. Symlinks are listed but not followed.
///
/// # Examples
///
/// ```no_run
/// use guidstrip_core::walker::collect_files;
/// use std::path::Path;
///
/// let files = collect_files(Path::new("temp/run/solution"))?;
/// for file in &files {
///     println!("{}", file.relative_path.display());
/// }
/// # Ok::<(), guidstrip_core::SanitizeError>(())
/// ```
pub fn collect_files(root: &Path) -> Result<Vec<WalkedFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.into_path();
        let relative_path = path
            .strip_prefix(root)
            .map_err(|e| {
                SanitizeError::Io(std::io::Error::other(format!(
                    "{} is not below {}: {e}",
                    path.display(),
                    root.display()
                )))
            })?
            .to_path_buf();

        files.push(WalkedFile {
            path,
            relative_path,
        });
    }

    Ok(files)
}

/// Collects every directory below `root`, deepest first.
///
/// Removing the returned directories in order only ever removes directories
/// whose children were removed before them.
pub fn collect_directories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut directories = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_dir() {
            directories.push(entry.into_path());
        }
    }

    Ok(directories)
}

fn walk_error(err: walkdir::Error) -> SanitizeError {
    SanitizeError::Io(std::io::Error::other(format!("walkdir error: {err}")))
}
