//! Error types for solution sanitization.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `SanitizeError`.
pub type Result<T> = std::result::Result<T, SanitizeError>;

/// Why a file could not be renamed to its sanitized name.
#[derive(Debug)]
pub enum RenameFailure {
    /// The sanitized path is already taken by another file.
    Collision,
    /// The file name consisted of identifiers only.
    EmptyName,
    /// The filesystem refused the rename.
    Io(std::io::Error),
}

impl std::fmt::Display for RenameFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collision => write!(f, "target already exists"),
            Self::EmptyName => write!(f, "sanitized file name is empty"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

/// Errors that can occur while sanitizing a solution archive.
#[derive(Error, Debug)]
pub enum SanitizeError {
    /// I/O operation failed outside of a more specific stage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source archive does not exist.
    #[error("source archive not found: {path}")]
    SourceNotFound {
        /// The missing archive path.
        path: PathBuf,
    },

    /// Source archive is not a readable zip container.
    #[error("corrupt archive {path}: {reason}")]
    CorruptArchive {
        /// The archive path.
        path: PathBuf,
        /// What the zip reader reported.
        reason: String,
    },

    /// Workspace directory could not be created.
    #[error("cannot create workspace {path}: {source}")]
    Workspace {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A file could not be renamed to its sanitized name.
    #[error("cannot rename {from} to {to}: {reason}")]
    Rename {
        /// Original path.
        from: PathBuf,
        /// Sanitized path.
        to: PathBuf,
        /// Why the rename failed.
        reason: RenameFailure,
    },

    /// An archive entry could not be written into the workspace.
    #[error("cannot extract to {path}: {source}")]
    Extraction {
        /// The file or directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A markup file could not be decoded or rewritten.
    #[error("cannot rewrite markup file {path}: {source}")]
    ContentRewrite {
        /// The markup file.
        path: PathBuf,
        /// Underlying I/O or UTF-8 decode error.
        source: std::io::Error,
    },

    /// The output archive could not be written.
    #[error("cannot write output archive {path}: {source}")]
    Packaging {
        /// The output archive path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A workspace file or directory could not be removed.
    #[error("cannot remove {path}: {source}")]
    Cleanup {
        /// The path that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The identifier expressions failed to compile.
    #[error("invalid identifier pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration values are unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which value is wrong.
        reason: String,
    },

    /// A pipeline was asked to run a second time.
    #[error("pipeline already ran and is in state {stage}")]
    PipelineReused {
        /// The state the pipeline was left in.
        stage: crate::PipelineStage,
    },
}

impl SanitizeError {
    /// Returns `true` if the error is caused by the input archive itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use guidstrip_core::SanitizeError;
    /// use std::path::PathBuf;
    ///
    /// let err = SanitizeError::CorruptArchive {
    ///     path: PathBuf::from("solution.zip"),
    ///     reason: "invalid Zip archive".into(),
    /// };
    /// assert!(err.is_input_error());
    ///
    /// let err = SanitizeError::InvalidConfig {
    ///     reason: "empty output name".into(),
    /// };
    /// assert!(!err.is_input_error());
    /// ```
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. } | Self::CorruptArchive { .. }
        )
    }

    /// Returns the path the error concerns, if any.
    ///
    /// For rename failures this is the original path.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::SourceNotFound { path }
            | Self::CorruptArchive { path, .. }
            | Self::Workspace { path, .. }
            | Self::Extraction { path, .. }
            | Self::ContentRewrite { path, .. }
            | Self::Packaging { path, .. }
            | Self::Cleanup { path, .. } => Some(path),
            Self::Rename { from, .. } => Some(from),
            _ => None,
        }
    }
}
