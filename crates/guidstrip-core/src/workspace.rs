//! Per-run workspace directories.
//!
//! A workspace looks like this once the archive has been built:
//!
//! ```text
//! <workspace_root>/<uuid>/
//! ├── cleanedSolution.zip
//! └── solution/          extracted, renamed and rewritten entries
//! ```
//!
//! Keeping extracted entries in their own subdirectory means no extracted
//! file can ever occupy the output archive path.

use crate::Reporter;
use crate::Result;
use crate::SanitizeConfig;
use crate::SanitizeError;
use crate::SanitizeReport;
use crate::Step;
use crate::walker::collect_directories;
use crate::walker::collect_files;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use uuid::Uuid;

/// Name of the subdirectory that receives extracted entries.
pub const STAGING_DIR_NAME: &str = "solution";

/// An exclusively owned workspace directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    staging: PathBuf,
    output: PathBuf,
}

impl Workspace {
    /// Creates `<workspace_root>/<uuid>/` and its staging directory.
    ///
    /// The directory name is a random v4 UUID, so concurrent runs sharing
    /// the same root never collide.
    ///
    /// # Errors
    ///
    /// Returns `SanitizeError::Workspace` if a directory cannot be created.
    pub fn create(config: &SanitizeConfig) -> Result<Self> {
        let name = Uuid::new_v4().simple().to_string();
        Self::create_at(config.workspace_root.join(name), &config.output_name)
    }

    /// Creates a workspace at an explicit location.
    ///
    /// Parent directories are created as needed; `root` itself must not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns `SanitizeError::Workspace` if `root` already exists or a
    /// directory cannot be created.
    pub fn create_at(root: PathBuf, output_name: &str) -> Result<Self> {
        if let Some(parent) = root.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SanitizeError::Workspace {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::create_dir(&root).map_err(|source| SanitizeError::Workspace {
            path: root.clone(),
            source,
        })?;

        let staging = root.join(STAGING_DIR_NAME);
        fs::create_dir(&staging).map_err(|source| SanitizeError::Workspace {
            path: staging.clone(),
            source,
        })?;

        let output = root.join(output_name);
        Ok(Self {
            root,
            staging,
            output,
        })
    }

    /// Workspace directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding extracted entries.
    #[must_use]
    pub fn staging_dir(&self) -> &Path {
        &self.staging
    }

    /// Location of the output archive.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Deletes everything below the workspace root except the output
    /// archive.
    ///
    /// Files are removed first, then directories deepest first. The workspace
    /// root itself is kept because it holds the output archive.
    ///
    /// # Errors
    ///
    /// Returns `SanitizeError::Cleanup` for the first file or directory that
    /// cannot be removed; the rest of the sweep is abandoned.
    pub fn sweep(&self, report: &mut SanitizeReport, reporter: &mut dyn Reporter) -> Result<()> {
        let files = collect_files(&self.root)?;

        for file in files.iter().filter(|f| f.path != self.output) {
            fs::remove_file(&file.path).map_err(|source| SanitizeError::Cleanup {
                path: file.path.clone(),
                source,
            })?;
            report.files_removed += 1;
            reporter.on_entry(Step::Sweep, &file.relative_path);
        }

        for dir in collect_directories(&self.root)? {
            fs::remove_dir(&dir).map_err(|source| SanitizeError::Cleanup {
                path: dir.clone(),
                source,
            })?;
            report.directories_removed += 1;
        }

        Ok(())
    }
}
