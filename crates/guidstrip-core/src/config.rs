//! Configuration for sanitization runs.

use crate::Result;
use crate::SanitizeError;
use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

/// Default directory under which per-run workspaces are created.
pub const DEFAULT_WORKSPACE_ROOT: &str = "temp";

/// Default file name of the cleaned archive.
pub const DEFAULT_OUTPUT_NAME: &str = "cleanedSolution.zip";

/// Default suffix of files whose content is rewritten.
pub const DEFAULT_MARKUP_EXTENSION: &str = ".xml";

/// Configuration for a sanitization run.
///
/// # Examples
///
/// ```
/// use guidstrip_core::SanitizeConfig;
///
/// // Use defaults
/// let config = SanitizeConfig::default();
/// assert_eq!(config.output_name, "cleanedSolution.zip");
///
/// // Customize for specific needs
/// let custom = SanitizeConfig::default()
///     .with_workspace_root("/var/tmp/guidstrip")
///     .with_compression_level(9);
/// ```
#[derive(Debug, Clone)]
pub struct SanitizeConfig {
    /// Directory under which a uniquely named workspace is created for
    /// every run. Relative paths resolve against the process working
    /// directory.
    ///
    /// Default: `temp`.
    pub workspace_root: PathBuf,

    /// File name of the output archive, placed at the workspace root.
    ///
    /// Default: `cleanedSolution.zip`.
    pub output_name: String,

    /// Case-sensitive file name suffix selecting markup files for content
    /// rewriting.
    ///
    /// Default: `.xml`.
    pub markup_extension: String,

    /// Deflate level (1-9) for the output archive, `Some(0)` stores entries
    /// uncompressed.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            workspace_root: PathBuf::from(DEFAULT_WORKSPACE_ROOT),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            markup_extension: DEFAULT_MARKUP_EXTENSION.to_string(),
            compression_level: Some(6),
        }
    }
}

impl SanitizeConfig {
    /// Creates a new `SanitizeConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workspace root directory.
    #[must_use]
    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = root.into();
        self
    }

    /// Sets the output archive file name.
    #[must_use]
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    /// Sets the markup file suffix.
    #[must_use]
    pub fn with_markup_extension(mut self, extension: impl Into<String>) -> Self {
        self.markup_extension = extension.into();
        self
    }

    /// Sets the compression level (0 stores).
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Checks that the configuration can be used for a run.
    ///
    /// # Errors
    ///
    /// Returns `SanitizeError::InvalidConfig` if:
    /// - the output name is empty or contains a directory component
    /// - the markup extension is empty
    /// - the compression level exceeds 9
    pub fn validate(&self) -> Result<()> {
        if self.output_name.is_empty()
            || Path::new(&self.output_name).file_name() != Some(OsStr::new(&self.output_name))
        {
            return Err(SanitizeError::InvalidConfig {
                reason: format!("output name must be a plain file name: {:?}", self.output_name),
            });
        }

        if self.markup_extension.is_empty() {
            return Err(SanitizeError::InvalidConfig {
                reason: "markup extension must not be empty".to_string(),
            });
        }

        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(SanitizeError::InvalidConfig {
                reason: format!("compression level must be 0-9, got {level}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SanitizeConfig::default();
        assert_eq!(config.workspace_root, PathBuf::from("temp"));
        assert_eq!(config.output_name, "cleanedSolution.zip");
        assert_eq!(config.markup_extension, ".xml");
        assert_eq!(config.compression_level, Some(6));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = SanitizeConfig::new()
            .with_workspace_root("/tmp/work")
            .with_output_name("out.zip")
            .with_markup_extension(".XML")
            .with_compression_level(0);

        assert_eq!(config.workspace_root, PathBuf::from("/tmp/work"));
        assert_eq!(config.output_name, "out.zip");
        assert_eq!(config.markup_extension, ".XML");
        assert_eq!(config.compression_level, Some(0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nested_output_name() {
        let config = SanitizeConfig::default().with_output_name("nested/out.zip");
        assert!(matches!(
            config.validate(),
            Err(SanitizeError::InvalidConfig { .. })
        ));

        let config = SanitizeConfig::default().with_output_name("");
        assert!(config.validate().is_err());

        let config = SanitizeConfig::default().with_output_name("..");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let config = SanitizeConfig::default().with_markup_extension("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_compression_level() {
        let config = SanitizeConfig::default().with_compression_level(10);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("compression level"));
    }
}
