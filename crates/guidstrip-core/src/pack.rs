//! Output archive creation.
//!
//! Packs the sanitized tree into the workspace output archive. Only regular
//! files become entries; empty directories are not preserved.

use crate::Reporter;
use crate::Result;
use crate::SanitizeConfig;
use crate::SanitizeError;
use crate::SanitizeReport;
use crate::Step;
use crate::Workspace;
use crate::walker::collect_files;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Component;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds the output archive from the workspace staging directory.
///
/// Entry names are paths relative to the staging directory with forward
/// slashes. The output archive sits outside the staging directory, so it
/// is never one of its own entries.
///
/// # Errors
///
/// Returns `SanitizeError::Packaging` if the output file cannot be created
/// or an entry cannot be read or written.
pub fn build_output_archive(
    workspace: &Workspace,
    config: &SanitizeConfig,
    report: &mut SanitizeReport,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let output = workspace.output_path();
    let entries = collect_files(workspace.staging_dir())?;

    let file = File::create(output).map_err(|e| packaging(output, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = file_options(config.compression_level);

    // Reusable buffer for file copying
    let mut buffer = vec![0u8; 64 * 1024]; // 64 KB

    for entry in &entries {
        let name = normalize_zip_path(&entry.relative_path).map_err(|e| packaging(output, e))?;
        let bytes = add_file_to_zip(&mut zip, &entry.path, name, options, &mut buffer)
            .map_err(|e| packaging(output, e))?;

        report.entries_packed += 1;
        report.bytes_packed += bytes;
        reporter.on_entry(Step::Package, &entry.relative_path);
    }

    let mut writer = zip
        .finish()
        .map_err(|e| packaging(output, io::Error::other(format!("failed to finish ZIP archive: {e}"))))?;
    writer.flush().map_err(|e| packaging(output, e))?;

    Ok(())
}

/// Stores entries for level 0, deflates them otherwise.
fn file_options(compression_level: Option<u8>) -> SimpleFileOptions {
    if compression_level == Some(0) {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        let level = compression_level.unwrap_or(6);
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    }
}

/// Adds a single file to the ZIP archive, returning the bytes copied.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    file_path: &Path,
    archive_name: String,
    options: SimpleFileOptions,
    buffer: &mut [u8],
) -> io::Result<u64> {
    let mut file = File::open(file_path)?;

    zip.start_file(archive_name, options)
        .map_err(|e| io::Error::other(format!("failed to start file in ZIP: {e}")))?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
    }

    Ok(bytes_written)
}

/// Converts a relative path to a ZIP entry name.
///
/// ZIP format requires forward slashes (/) as path separators, regardless
/// of platform.
fn normalize_zip_path(path: &Path) -> io::Result<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str().ok_or_else(|| {
                io::Error::other(format!("path is not valid UTF-8: {}", path.display()))
            })?),
            _ => {
                return Err(io::Error::other(format!(
                    "entry path is not relative: {}",
                    path.display()
                )));
            }
        }
    }
    Ok(parts.join("/"))
}

fn packaging(output: &Path, source: io::Error) -> SanitizeError {
    SanitizeError::Packaging {
        path: output.to_path_buf(),
        source,
    }
}
