//! Zip extraction into the workspace.

use crate::Reporter;
use crate::Result;
use crate::SanitizeError;
use crate::SanitizeReport;
use crate::Step;
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

/// Extracts every entry of `source` into `dest`, preserving relative paths.
///
/// Entry names that would land outside `dest` (absolute paths, `..`
/// components) make the archive count as corrupt.
///
/// # Errors
///
/// Returns an error if:
/// - `source` does not exist (`SourceNotFound`)
/// - `source` is not a valid zip container or an entry is unreadable
///   (`CorruptArchive`)
/// - a file or directory cannot be written below `dest` (`Extraction`)
///
/// A failure in the middle of the archive leaves the entries written so far
/// in place.
pub fn extract_archive(
    source: &Path,
    dest: &Path,
    report: &mut SanitizeReport,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    if !source.exists() {
        return Err(SanitizeError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    let file = File::open(source)?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| corrupt(source, e.to_string()))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| corrupt(source, e.to_string()))?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(corrupt(
                source,
                format!("entry escapes extraction directory: {}", entry.name()),
            ));
        };
        let target = dest.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| extraction(&target, e))?;
            report.directories_created += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| extraction(parent, e))?;
        }

        let mut out = File::create(&target).map_err(|e| extraction(&target, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| {
            // Decompression and checksum failures surface as InvalidData.
            if e.kind() == io::ErrorKind::InvalidData {
                corrupt(source, format!("{}: {e}", relative.display()))
            } else {
                extraction(&target, e)
            }
        })?;

        report.files_extracted += 1;
        reporter.on_entry(Step::Extract, &relative);
    }

    Ok(())
}

fn extraction(path: &Path, source: io::Error) -> SanitizeError {
    SanitizeError::Extraction {
        path: path.to_path_buf(),
        source,
    }
}

fn corrupt(source: &Path, reason: String) -> SanitizeError {
    SanitizeError::CorruptArchive {
        path: source.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::NoopReporter;
    use crate::test_utils::ZipTestBuilder;
    use crate::test_utils::create_test_zip;
    use tempfile::TempDir;

    #[test]
    fn test_extract_preserves_structure() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("solution.zip");
        fs::write(
            &source,
            create_test_zip(&[
                ("solution.xml", "<Solution/>"),
                ("Workflows/Flow.json", "{}"),
            ]),
        )
        .unwrap();
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();

        let mut report = SanitizeReport::new();
        extract_archive(&source, &dest, &mut report, &mut NoopReporter).unwrap();

        assert_eq!(report.files_extracted, 2);
        assert_eq!(
            fs::read_to_string(dest.join("solution.xml")).unwrap(),
            "<Solution/>"
        );
        assert_eq!(
            fs::read_to_string(dest.join("Workflows/Flow.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_extract_directory_entries() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("solution.zip");
        let data = ZipTestBuilder::new()
            .add_directory("Assets/")
            .add_file("Assets/icon.png", &[0x89, 0x50])
            .build();
        fs::write(&source, data).unwrap();

        let mut report = SanitizeReport::new();
        extract_archive(&source, temp.path(), &mut report, &mut NoopReporter).unwrap();

        assert_eq!(report.directories_created, 1);
        assert_eq!(report.files_extracted, 1);
        assert!(temp.path().join("Assets").is_dir());
    }

    #[test]
    fn test_extract_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = extract_archive(
            &temp.path().join("missing.zip"),
            temp.path(),
            &mut SanitizeReport::new(),
            &mut NoopReporter,
        );
        assert!(matches!(result, Err(SanitizeError::SourceNotFound { .. })));
    }

    #[test]
    fn test_extract_not_a_zip() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("solution.zip");
        fs::write(&source, "this is plain text, not a zip container").unwrap();

        let result = extract_archive(
            &source,
            temp.path(),
            &mut SanitizeReport::new(),
            &mut NoopReporter,
        );
        match result {
            Err(SanitizeError::CorruptArchive { path, .. }) => assert_eq!(path, source),
            other => panic!("expected corrupt archive, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_rejects_traversal_entry() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("evil.zip");
        fs::write(&source, create_test_zip(&[("../escape.txt", "x")])).unwrap();
        let dest = temp.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let result = extract_archive(
            &source,
            &dest,
            &mut SanitizeReport::new(),
            &mut NoopReporter,
        );
        assert!(matches!(result, Err(SanitizeError::CorruptArchive { .. })));
        assert!(!temp.path().join("escape.txt").exists());
    }

    #[test]
    fn test_extract_file_blocking_directory_names_path() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("solution.zip");
        fs::write(&source, create_test_zip(&[("a", "file"), ("a/b", "nested")])).unwrap();
        let dest = temp.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let result = extract_archive(
            &source,
            &dest,
            &mut SanitizeReport::new(),
            &mut NoopReporter,
        );
        match result {
            Err(err @ SanitizeError::Extraction { .. }) => {
                assert_eq!(err.path(), Some(dest.join("a").as_path()));
                assert!(err.to_string().contains("cannot extract to"));
            }
            other => panic!("expected extraction error, got {other:?}"),
        }
    }
}
