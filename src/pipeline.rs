//! Artifact-to-image pipeline: extract, reconcile, encode.
//!
//! Every call is independent and holds no state, so conversions can run on
//! any number of threads at once.

use tracing::debug;

use crate::config::ConversionConfig;
use crate::encode::{encode, RasterImage};
use crate::error::{RasterError, Result};
use crate::extract::{extract_detailed, ListingStats};
use crate::raster::{normalize_intensity, resize_grid, to_grid, PixelGrid};

/// Grid produced from one artifact, before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub grid: PixelGrid,
    /// Extracted payload length before reconciliation
    pub payload_len: usize,
    pub listing: ListingStats,
}

/// Encoded image produced from one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub image: RasterImage,
    pub payload_len: usize,
    pub listing: ListingStats,
}

/// Map an already-extracted payload to a grid under `config`.
///
/// Applies optional normalization, reconciliation, and the optional resample
/// to the display geometry. An empty payload still yields a grid.
pub fn payload_to_grid(mut payload: Vec<u8>, config: &ConversionConfig) -> Result<PixelGrid> {
    let geometry = config.geometry()?;
    if config.normalize {
        normalize_intensity(&mut payload);
    }
    let grid = to_grid(&payload, geometry, config.reconciliation);
    match config.display_geometry()? {
        Some(display) => resize_grid(&grid, display, config.resize_filter),
        None => Ok(grid),
    }
}

/// Extract and reconcile `artifact`.
///
/// # Errors
///
/// `MalformedHeader` when PE header stripping rejects the input,
/// `EmptyPayload` when extraction yields nothing else.
pub fn render(artifact: &[u8], config: &ConversionConfig) -> Result<Rendered> {
    let extraction = extract_detailed(artifact, config.strategy);
    if extraction.is_empty() {
        return Err(match extraction.header_error {
            Some(err) => RasterError::MalformedHeader(err),
            None => RasterError::EmptyPayload,
        });
    }

    let payload_len = extraction.payload.len();
    let grid = payload_to_grid(extraction.payload, config)?;
    debug!(payload_len, geometry = %grid.geometry(), "Rendered artifact");
    Ok(Rendered {
        grid,
        payload_len,
        listing: extraction.listing,
    })
}

/// Full conversion of one in-memory artifact to a PNG.
pub fn convert_bytes(artifact: &[u8], config: &ConversionConfig) -> Result<Conversion> {
    let rendered = render(artifact, config)?;
    Ok(Conversion {
        image: encode(&rendered.grid)?,
        payload_len: rendered.payload_len,
        listing: rendered.listing,
    })
}
