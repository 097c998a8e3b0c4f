//! Test utilities for building and reading solution archives.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Cursor;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;

/// Creates an in-memory ZIP archive from text entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed.
///
/// # Examples
///
/// ```
/// use guidstrip_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[("solution.xml", "<Solution/>"), ("dir/a.json", "{}")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    entries
        .iter()
        .fold(ZipTestBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data.as_bytes())
        })
        .build()
}

/// Reads every file entry of a ZIP archive on disk.
///
/// Returns a map from entry name to content; directory entries are skipped.
#[must_use]
pub fn read_zip_entries(path: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entries = BTreeMap::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).unwrap();
        if entry.is_dir() {
            continue;
        }
        let mut data = Vec::new();
        entry.read_to_end(&mut data).unwrap();
        entries.insert(entry.name().to_string(), data);
    }

    entries
}

/// Builder for creating ZIP test archives with files and directories.
///
/// # Examples
///
/// ```
/// use guidstrip_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .build();
/// ```
pub struct ZipTestBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a regular file to the archive.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a deflated file to the archive.
    #[must_use]
    pub fn add_deflated_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory to the archive.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_test_zip() {
        let zip_data = create_test_zip(&[("file.txt", "hello")]);
        assert_eq!(&zip_data[0..4], b"PK\x03\x04");
    }

    #[test]
    fn test_zip_builder_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("t.zip");
        let data = ZipTestBuilder::new()
            .add_directory("dir/")
            .add_file("dir/a.txt", b"a")
            .add_deflated_file("b.xml", b"<b/>")
            .build();
        std::fs::write(&path, data).unwrap();

        let entries = read_zip_entries(&path);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["dir/a.txt"], b"a");
        assert_eq!(entries["b.xml"], b"<b/>");
    }
}
