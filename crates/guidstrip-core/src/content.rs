//! Identifier removal from markup file content.

use crate::GuidPattern;
use crate::Reporter;
use crate::Result;
use crate::SanitizeError;
use crate::SanitizeReport;
use crate::Step;
use crate::walker::collect_files;
use std::fs;
use std::path::Path;

/// Rewrites every markup file below `root` without its identifiers.
///
/// A file is markup when its name ends with `extension` (case-sensitive).
/// Run this after [`sanitize_names`](crate::rename::sanitize_names) so the
/// check sees final names. Files without identifiers are not rewritten.
///
/// # Errors
///
/// Returns `SanitizeError::ContentRewrite` if a markup file is not valid
/// UTF-8 or cannot be read or written.
pub fn sanitize_markup(
    root: &Path,
    patterns: &GuidPattern,
    extension: &str,
    report: &mut SanitizeReport,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let files = collect_files(root)?;

    for file in files.iter().filter(|f| is_markup(&f.path, extension)) {
        report.markup_files_scanned += 1;

        let text = fs::read_to_string(&file.path).map_err(|source| {
            SanitizeError::ContentRewrite {
                path: file.path.clone(),
                source,
            }
        })?;

        let (cleaned, removed) = patterns.strip_content(&text);
        if removed == 0 {
            continue;
        }

        fs::write(&file.path, cleaned.as_bytes()).map_err(|source| {
            SanitizeError::ContentRewrite {
                path: file.path.clone(),
                source,
            }
        })?;

        report.markup_files_rewritten += 1;
        report.content_identifiers_removed += removed;
        reporter.on_entry(Step::Rewrite, &file.relative_path);
    }

    Ok(())
}

fn is_markup(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(extension))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::NoopReporter;
    use tempfile::TempDir;

    const ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn run(root: &Path) -> (Result<()>, SanitizeReport) {
        let patterns = GuidPattern::new().unwrap();
        let mut report = SanitizeReport::new();
        let result = sanitize_markup(root, &patterns, ".xml", &mut report, &mut NoopReporter);
        (result, report)
    }

    #[test]
    fn test_is_markup_case_sensitive() {
        assert!(is_markup(Path::new("a/b.xml"), ".xml"));
        assert!(!is_markup(Path::new("a/b.XML"), ".xml"));
        assert!(!is_markup(Path::new("a/b.xml.bak"), ".xml"));
        assert!(!is_markup(Path::new("a/xml"), ".xml"));
    }

    #[test]
    fn test_rewrites_markup_only() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("entity.xml"), format!("<Id>{ID}</Id>")).unwrap();
        fs::write(root.join("flow.json"), format!("{{\"id\":\"{ID}\"}}")).unwrap();

        let (result, report) = run(root);
        result.unwrap();

        assert_eq!(
            fs::read_to_string(root.join("entity.xml")).unwrap(),
            "<Id></Id>"
        );
        assert_eq!(
            fs::read_to_string(root.join("flow.json")).unwrap(),
            format!("{{\"id\":\"{ID}\"}}")
        );
        assert_eq!(report.markup_files_scanned, 1);
        assert_eq!(report.markup_files_rewritten, 1);
        assert_eq!(report.content_identifiers_removed, 1);
    }

    #[test]
    fn test_leaves_clean_markup_alone() {
        let temp = TempDir::new().unwrap();
        let body = "<?xml version=\"1.0\"?>\r\n<Solution version=\"9.2\"/>\r\n";
        fs::write(temp.path().join("solution.xml"), body).unwrap();

        let (result, report) = run(temp.path());
        result.unwrap();

        assert_eq!(report.markup_files_rewritten, 0);
        assert_eq!(
            fs::read(temp.path().join("solution.xml")).unwrap(),
            body.as_bytes()
        );
    }

    #[test]
    fn test_leading_dash_survives_in_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.xml"), format!("<Ref>name-{ID}</Ref>")).unwrap();

        run(temp.path()).0.unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("a.xml")).unwrap(),
            "<Ref>name-</Ref>"
        );
    }

    #[test]
    fn test_invalid_utf8_markup() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.xml");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x3c]).unwrap();

        let (result, _) = run(temp.path());

        match result {
            Err(SanitizeError::ContentRewrite { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected content rewrite error, got {other:?}"),
        }
    }
}
