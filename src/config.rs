//! Configuration for artifact conversion.
//!
//! One [`ConversionConfig`] describes how a family of input files becomes
//! images. Presets cover the usual families; anything else can be loaded from
//! JSON. Nothing here holds paths: where inputs come from and where images go
//! is decided by the caller.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RasterError, Result};
use crate::extract::{ExtractionStrategy, ListingPolicy};
use crate::io::IOLimits;
use crate::raster::{ImageGeometry, Reconciliation, ResizeFilter, DEFAULT_SIDE};

/// Master configuration for the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Payload extraction algorithm.
    pub strategy: ExtractionStrategy,
    /// Fit policy from payload length to pixel count.
    pub reconciliation: Reconciliation,
    /// Side of the square output for fixed-geometry policies (default: 256).
    pub side: u32,
    /// Stretch payload intensities so the maximum maps to 255 (default: false).
    pub normalize: bool,
    /// Resample auto-sized grids to this square side before encoding.
    pub display_side: Option<u32>,
    /// Filter used when resampling to `display_side`.
    pub resize_filter: ResizeFilter,
    /// Input size limits.
    pub io: IOLimits,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            strategy: ExtractionStrategy::Raw,
            reconciliation: Reconciliation::PadTruncate,
            side: DEFAULT_SIDE,
            normalize: false,
            display_side: None,
            resize_filter: ResizeFilter::default(),
            io: IOLimits::default(),
        }
    }
}

impl ConversionConfig {
    /// Hex-dump disassembly listings (`.bytes`): strict 16-byte lines, 256x256, zero-padded.
    pub fn executable_listing() -> Self {
        Self {
            strategy: ExtractionStrategy::AddressColumnStrip(ListingPolicy::StrictWidth),
            ..Self::default()
        }
    }

    /// PE executables with the header region dropped, 256x256, zero-padded.
    pub fn pe_body() -> Self {
        Self {
            strategy: ExtractionStrategy::PeHeaderStrip,
            ..Self::default()
        }
    }

    /// Office documents and spreadsheets: whole-file square fingerprint
    /// resampled to 256x256.
    pub fn document_fingerprint() -> Self {
        Self {
            reconciliation: Reconciliation::SquareAutoSize,
            display_side: Some(DEFAULT_SIDE),
            ..Self::default()
        }
    }

    /// Small opaque containers: intensity-normalized and tiled to 256x256.
    pub fn normalized_tiled() -> Self {
        Self {
            reconciliation: Reconciliation::TileRepeat,
            normalize: true,
            ..Self::default()
        }
    }

    /// Fixed output geometry.
    pub fn geometry(&self) -> Result<ImageGeometry> {
        ImageGeometry::square(self.side)
    }

    /// Resampling target, if any.
    pub fn display_geometry(&self) -> Result<Option<ImageGeometry>> {
        self.display_side.map(ImageGeometry::square).transpose()
    }

    /// Check that every geometry in the config is usable.
    pub fn validate(&self) -> Result<()> {
        self.geometry()?;
        self.display_geometry()?;
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RasterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RasterError::Config(e.to_string()))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RasterError::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_string()?).map_err(|e| RasterError::io(path, e))
    }
}
