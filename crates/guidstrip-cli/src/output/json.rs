//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use guidstrip_core::SanitizeReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

/// Serializable view of a `SanitizeReport`.
#[derive(Debug, Serialize)]
struct SanitizeOutput {
    output_path: String,
    workspace: String,
    files_extracted: usize,
    files_renamed: usize,
    markup_files_scanned: usize,
    markup_files_rewritten: usize,
    identifiers_removed: usize,
    entries_packed: usize,
    bytes_packed: u64,
    duration_ms: u128,
}

impl From<&SanitizeReport> for SanitizeOutput {
    fn from(report: &SanitizeReport) -> Self {
        Self {
            output_path: report.output_path.display().to_string(),
            workspace: report.workspace.display().to_string(),
            files_extracted: report.files_extracted,
            files_renamed: report.files_renamed,
            markup_files_scanned: report.markup_files_scanned,
            markup_files_rewritten: report.markup_files_rewritten,
            identifiers_removed: report.identifiers_removed(),
            entries_packed: report.entries_packed,
            bytes_packed: report.bytes_packed,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_clean_result(&self, report: &SanitizeReport) -> Result<()> {
        let output = JsonOutput::success("clean", SanitizeOutput::from(report));
        Self::output(&output)
    }

    fn format_document_result(&self, report: &SanitizeReport, output_dir: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct DocumentOutput {
            #[serde(flatten)]
            sanitize: SanitizeOutput,
            documentation_dir: String,
        }

        let data = DocumentOutput {
            sanitize: SanitizeOutput::from(report),
            documentation_dir: output_dir.display().to_string(),
        };

        let output = JsonOutput::success("document", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::warning(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sanitize_output_from_report() {
        let mut report = SanitizeReport::new();
        report.output_path = PathBuf::from("temp/run/cleanedSolution.zip");
        report.name_identifiers_removed = 2;
        report.content_identifiers_removed = 3;

        let json = serde_json::to_value(JsonOutput::success(
            "clean",
            SanitizeOutput::from(&report),
        ))
        .unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["operation"], "clean");
        assert_eq!(json["data"]["output_path"], "temp/run/cleanedSolution.zip");
        assert_eq!(json["data"]["identifiers_removed"], 5);
    }
}
