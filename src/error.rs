//! Error types for the binraster conversion pipeline.
//!
//! This module provides structured error handling using thiserror. Each
//! variant corresponds to one failure mode of a single artifact conversion;
//! none of them is fatal to a batch.

use std::path::PathBuf;
use thiserror::Error;

use crate::formats::pe::PeError;

/// Main error type for binraster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    /// PE header validation failed while stripping headers
    #[error("Malformed header: {0}")]
    MalformedHeader(#[from] PeError),

    /// Extraction produced no usable payload bytes
    #[error("No usable payload bytes extracted")]
    EmptyPayload,

    /// File read/write failure, carrying the offending path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path resolves to the input artifact itself
    #[error("Output {} would overwrite its own input", path.display())]
    OutputIsInput { path: PathBuf },

    /// Input file exceeds the configured size limit
    #[error("Input {} is {found} bytes, limit is {limit}", path.display())]
    InputTooLarge { path: PathBuf, limit: u64, found: u64 },

    /// Requested image geometry cannot be produced
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Raster container encoding errors
    #[error("Encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// Configuration loading/saving errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RasterError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the artifact should be skipped rather than counted as a failure.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::EmptyPayload | Self::MalformedHeader(_))
    }
}

/// Result type alias for binraster operations
pub type Result<T> = std::result::Result<T, RasterError>;

/// Convert binraster errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<RasterError> for pyo3::PyErr {
    fn from(err: RasterError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            RasterError::Io { .. }
            | RasterError::InputTooLarge { .. }
            | RasterError::OutputIsInput { .. } => {
                PyIOError::new_err(err.to_string())
            }
            RasterError::EmptyPayload
            | RasterError::MalformedHeader(_)
            | RasterError::InvalidGeometry(_) => PyValueError::new_err(err.to_string()),
            _ => PyException::new_err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RasterError::MalformedHeader(PeError::InvalidDosSignature);
        assert_eq!(err.to_string(), "Malformed header: Invalid DOS signature");

        let err = RasterError::io(
            "/tmp/missing.bin",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/missing.bin: gone");
    }

    #[test]
    fn test_skip_classification() {
        assert!(RasterError::EmptyPayload.is_skip());
        assert!(RasterError::MalformedHeader(PeError::InvalidPeSignature).is_skip());
        assert!(!RasterError::InvalidGeometry("0x0".into()).is_skip());
        assert!(!RasterError::io("x", std::io::Error::other("boom")).is_skip());
        assert!(!RasterError::OutputIsInput { path: "scan.png".into() }.is_skip());
    }
}
