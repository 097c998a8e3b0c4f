//! GUID stripping for zipped solution archives.
//!
//! `guidstrip-core` takes a zipped solution export, removes the 36-character
//! identifiers that make exports of the same solution differ, and packs the
//! result into a fresh archive. The source archive is never modified.
//!
//! The run is a single-use [`Pipeline`]:
//!
//! 1. Extract the archive into a uniquely named workspace
//! 2. Strip identifiers from file names
//! 3. Strip identifiers from markup file content
//! 4. Pack the sanitized tree into `cleanedSolution.zip`
//! 5. Remove everything from the workspace except that archive
//!
//! # Examples
//!
//! ```no_run
//! use guidstrip_core::SanitizeConfig;
//! use guidstrip_core::sanitize_solution;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SanitizeConfig::default();
//! let report = sanitize_solution("solution.zip", &config)?;
//! println!("Cleaned solution at {}", report.output_path.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod extract;
pub mod pack;
pub mod pattern;
pub mod pipeline;
pub mod rename;
pub mod report;
pub mod walker;
pub mod workspace;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::sanitize_solution;
pub use api::sanitize_solution_with_reporter;
pub use config::SanitizeConfig;
pub use error::RenameFailure;
pub use error::Result;
pub use error::SanitizeError;
pub use pattern::GuidPattern;
pub use pipeline::Pipeline;
pub use pipeline::PipelineStage;
pub use pipeline::Step;
pub use report::NoopReporter;
pub use report::Reporter;
pub use report::SanitizeReport;
pub use report::TracingReporter;
pub use workspace::Workspace;
