//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use guidstrip_core::SanitizeConfig;
use guidstrip_core::config::DEFAULT_MARKUP_EXTENSION;
use guidstrip_core::config::DEFAULT_WORKSPACE_ROOT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guidstrip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strip GUIDs from a solution archive
    Clean(CleanArgs),
    /// Strip GUIDs, then run the documentation generator on the result
    Document(DocumentArgs),
    /// Generate shell completion scripts
    Completion(CompletionArgs),
}

/// Options shared by every command that runs the pipeline.
#[derive(clap::Args)]
pub struct SanitizeArgs {
    /// Path to the zipped solution
    #[arg(value_name = "SOLUTION")]
    pub solution: PathBuf,

    /// Directory that receives one workspace per run
    #[arg(long, value_name = "DIR", default_value = DEFAULT_WORKSPACE_ROOT)]
    pub workspace_root: PathBuf,

    /// Compression level of the cleaned archive (0 stores entries)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// File name suffix of markup files whose content is sanitized
    #[arg(long, value_name = "EXT", default_value = DEFAULT_MARKUP_EXTENSION)]
    pub markup_extension: String,
}

impl SanitizeArgs {
    /// Builds the pipeline configuration from the parsed flags.
    pub fn to_config(&self) -> SanitizeConfig {
        let mut config = SanitizeConfig::default()
            .with_workspace_root(&self.workspace_root)
            .with_markup_extension(&self.markup_extension);
        if let Some(level) = self.compression_level {
            config = config.with_compression_level(level);
        }
        config
    }
}

#[derive(clap::Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub sanitize: SanitizeArgs,
}

#[derive(clap::Args)]
pub struct DocumentArgs {
    #[command(flatten)]
    pub sanitize: SanitizeArgs,

    /// Documentation generator executable
    #[arg(long, value_name = "EXE")]
    pub generator: PathBuf,

    /// Directory the generator writes documentation to
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: PathBuf,

    /// Directory prefixed to the cleaned archive path handed to the generator
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
