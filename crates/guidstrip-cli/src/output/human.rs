//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use guidstrip_core::SanitizeReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn headline(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn write_summary(&self, report: &SanitizeReport) {
        let _ = self.term.write_line(&format!(
            "  Cleaned archive:   {}",
            report.output_path.display()
        ));
        let _ = self
            .term
            .write_line(&format!("  Files extracted:   {}", report.files_extracted));
        let _ = self
            .term
            .write_line(&format!("  Files renamed:     {}", report.files_renamed));
        let _ = self.term.write_line(&format!(
            "  Markup rewritten:  {} of {}",
            report.markup_files_rewritten, report.markup_files_scanned
        ));
        let _ = self.term.write_line(&format!(
            "  GUIDs removed:     {}",
            report.identifiers_removed()
        ));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "    in names:        {}",
                report.name_identifiers_removed
            ));
            let _ = self.term.write_line(&format!(
                "    in content:      {}",
                report.content_identifiers_removed
            ));
            let _ = self.term.write_line(&format!(
                "  Packed size:       {}",
                Self::format_size(report.bytes_packed)
            ));
            let _ = self
                .term
                .write_line(&format!("  Workspace:         {}", report.workspace.display()));
            let _ = self
                .term
                .write_line(&format!("  Duration:          {:?}", report.duration));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_clean_result(&self, report: &SanitizeReport) -> Result<()> {
        if self.quiet {
            // The archive path is the one result scripts need.
            let _ = self
                .term
                .write_line(&report.output_path.display().to_string());
            return Ok(());
        }

        self.headline("Solution cleaned");
        self.write_summary(report);

        Ok(())
    }

    fn format_document_result(&self, report: &SanitizeReport, output_dir: &Path) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline("Documentation generated");
        let _ = self
            .term
            .write_line(&format!("  Documentation:     {}", output_dir.display()));
        self.write_summary(report);

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
