//! Bounded file reading for artifact conversion.
//!
//! [`SafeReader`] memory-maps an input artifact after checking its size, so a
//! single oversized file cannot exhaust memory in a batch run. Artifacts are
//! always consumed whole; the size check is the only limit.

pub mod error;

use crate::io::error::{IoError, Result};
use bytes::Bytes;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Resource limits applied when opening an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOLimits {
    /// Largest artifact, in bytes, that will be opened.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// A size-checked artifact backed by a read-only memory map.
pub struct SafeReader {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl SafeReader {
    /// Opens and memory-maps a file.
    ///
    /// Fails with [`IoError::ArtifactTooLarge`] if the file size exceeds
    /// `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening artifact"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "Artifact is too large"
            );
            return Err(IoError::ArtifactTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: read-only map of a regular file we just opened.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
        })
    }

    /// Size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The mapped contents; empty for a zero-length file.
    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Copies the whole artifact out of the map.
    pub fn read_all(&self) -> Bytes {
        let out = Bytes::copy_from_slice(self.as_slice());
        trace!(path = %self.path.display(), len = out.len(), "Read artifact");
        out
    }
}

/// Reads an entire artifact under `limits`.
pub fn read_artifact<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Bytes> {
    Ok(SafeReader::open(path, limits)?.read_all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content).unwrap();
        temp_file
    }

    #[test]
    fn read_all_returns_contents() {
        let file = create_temp_file(b"MZ\x90\x00payload");
        let data = read_artifact(file.path(), &IOLimits::default()).unwrap();
        assert_eq!(data, &b"MZ\x90\x00payload"[..]);
    }

    #[test]
    fn open_file_too_large_reports_real_size() {
        let file = create_temp_file(&[0; 100]);
        let limits = IOLimits { max_file_size: 50 };
        let result = SafeReader::open(file.path(), &limits);
        assert!(matches!(
            result,
            Err(IoError::ArtifactTooLarge {
                limit: 50,
                found: 100
            })
        ));
    }

    #[test]
    fn file_at_limit_is_accepted() {
        let file = create_temp_file(&[3; 64]);
        let reader = SafeReader::open(file.path(), &IOLimits { max_file_size: 64 }).unwrap();
        assert_eq!(reader.size(), 64);
        assert_eq!(reader.as_slice(), &[3u8; 64][..]);
        assert_eq!(reader.path(), file.path());
    }

    #[test]
    fn open_empty_file() {
        let file = create_temp_file(b"");
        let reader = SafeReader::open(file.path(), &IOLimits::default()).unwrap();
        assert_eq!(reader.size(), 0);
        assert!(reader.read_all().is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_artifact(dir.path().join("absent.exe"), &IOLimits::default());
        assert!(matches!(result, Err(IoError::Read(_))));
    }
}
