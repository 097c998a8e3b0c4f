//! Invocation of the external documentation generator.

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

/// Command line for one generator run.
///
/// Arguments are passed as discrete tokens, never through a shell:
///
/// ```text
/// <generator> -p <archive> -m -o <output>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInvocation {
    generator: PathBuf,
    archive: PathBuf,
    output: PathBuf,
}

impl GeneratorInvocation {
    /// Prepares an invocation for `archive`.
    ///
    /// A relative `archive` is joined onto `base_dir` when one is given; an
    /// absolute `archive` is used as is.
    pub fn new(
        generator: impl Into<PathBuf>,
        archive: &Path,
        output: impl Into<PathBuf>,
        base_dir: Option<&Path>,
    ) -> Self {
        let archive = match base_dir {
            Some(base) => base.join(archive),
            None => archive.to_path_buf(),
        };
        Self {
            generator: generator.into(),
            archive,
            output: output.into(),
        }
    }

    /// Archive path handed to the generator.
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// Arguments following the executable.
    pub fn args(&self) -> [&OsStr; 5] {
        [
            OsStr::new("-p"),
            self.archive.as_os_str(),
            OsStr::new("-m"),
            OsStr::new("-o"),
            self.output.as_os_str(),
        ]
    }

    /// Builds the process command.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.generator);
        command.args(self.args());
        command
    }

    /// Runs the generator and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable cannot be started or exits with a
    /// non-zero status.
    pub fn run(&self) -> Result<()> {
        tracing::info!(
            generator = %self.generator.display(),
            archive = %self.archive.display(),
            output = %self.output.display(),
            "Starting documentation generator"
        );

        let status = self.command().status().with_context(|| {
            format!(
                "failed to start documentation generator '{}'",
                self.generator.display()
            )
        })?;

        if !status.success() {
            bail!(
                "documentation generator '{}' failed with {status}\n\
                 HINT: The cleaned archive is kept at '{}'.",
                self.generator.display(),
                self.archive.display()
            );
        }

        tracing::info!(output = %self.output.display(), "Documentation generated");
        Ok(())
    }
}
