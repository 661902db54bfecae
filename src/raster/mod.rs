//! Byte-stream to pixel-grid mapping.
//!
//! A payload of any length is reconciled to an exact pixel count and reshaped
//! row-major into a [`PixelGrid`]:
//!
//! - [`Reconciliation::PadTruncate`]: first `w*h` bytes, zero-padded when short
//! - [`Reconciliation::TileRepeat`]: first `w*h` bytes, repeated when short
//! - [`Reconciliation::SquareAutoSize`]: smallest square that holds every byte
//!
//! The mapping is deterministic; no sampling or randomness is involved.
//!
//! # Example
//!
//! ```ignore
//! use binraster::raster::{to_grid, ImageGeometry, Reconciliation};
//!
//! let geometry = ImageGeometry::square(4)?;
//! let grid = to_grid(b"abc", geometry, Reconciliation::TileRepeat);
//! assert_eq!(grid.as_bytes(), b"abcabcabcabcabca");
//! ```

pub mod normalize;
pub mod resize;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::error::{RasterError, Result};

pub use normalize::normalize_intensity;
pub use resize::{resize_grid, ResizeFilter};

/// Default side length of fixed-geometry images.
pub const DEFAULT_SIDE: u32 = 256;

/// Output image dimensions. Both sides are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageGeometry {
    width: u32,
    height: u32,
}

impl ImageGeometry {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidGeometry(format!(
                "{width}x{height} has zero area"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn square(side: u32) -> Result<Self> {
        Self::new(side, side)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels, `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for ImageGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
        }
    }
}

impl fmt::Display for ImageGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How a payload is made to fit the target pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reconciliation {
    /// Truncate long payloads, zero-pad short ones.
    #[default]
    PadTruncate,
    /// Ignore the requested geometry; use `ceil(sqrt(n))` squared, zero-padded.
    SquareAutoSize,
    /// Truncate long payloads, repeat short ones end to end.
    TileRepeat,
}

/// Row-major 8-bit grayscale pixels.
///
/// Always holds exactly `width * height` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    geometry: ImageGeometry,
    pixels: Vec<u8>,
}

impl PixelGrid {
    /// Wraps `pixels`, which must hold exactly `geometry.pixel_count()` values.
    pub fn from_raw(geometry: ImageGeometry, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != geometry.pixel_count() {
            return Err(RasterError::InvalidGeometry(format!(
                "{} pixels do not fill {geometry}",
                pixels.len()
            )));
        }
        Ok(Self { geometry, pixels })
    }

    /// All-zero grid.
    pub fn zeroed(geometry: ImageGeometry) -> Self {
        Self {
            geometry,
            pixels: vec![0; geometry.pixel_count()],
        }
    }

    pub fn geometry(&self) -> ImageGeometry {
        self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.geometry.width as usize)
    }

    pub fn row(&self, row: u32) -> Option<&[u8]> {
        self.rows().nth(row as usize)
    }

    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.geometry.height || col >= self.geometry.width {
            return None;
        }
        self.pixels
            .get(row as usize * self.geometry.width as usize + col as usize)
            .copied()
    }
}

/// Reconcile `payload` to a pixel grid.
///
/// `geometry` is ignored under [`Reconciliation::SquareAutoSize`]; the grid's
/// own geometry reports the side that was chosen.
pub fn to_grid(
    payload: &[u8],
    geometry: ImageGeometry,
    reconciliation: Reconciliation,
) -> PixelGrid {
    let geometry = match reconciliation {
        Reconciliation::SquareAutoSize => auto_square(payload.len()),
        _ => geometry,
    };
    let target = geometry.pixel_count();

    let pixels = match reconciliation {
        Reconciliation::PadTruncate | Reconciliation::SquareAutoSize => {
            pad_truncate(payload, target)
        }
        Reconciliation::TileRepeat => tile_repeat(payload, target),
    };

    trace!(
        payload = payload.len(),
        %geometry,
        ?reconciliation,
        "Reconciled payload to grid"
    );
    PixelGrid { geometry, pixels }
}

/// Smallest square holding `n` pixels; never smaller than 1x1.
pub fn auto_square(n: usize) -> ImageGeometry {
    let side = ceil_sqrt(n).max(1) as u32;
    ImageGeometry {
        width: side,
        height: side,
    }
}

/// `ceil(sqrt(n))` computed exactly on integers.
pub fn ceil_sqrt(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    // Float estimate, then correct for rounding in either direction.
    let mut root = (n as f64).sqrt() as usize;
    while root.saturating_mul(root) > n {
        root -= 1;
    }
    while root.saturating_mul(root) < n {
        root += 1;
    }
    root
}

fn pad_truncate(payload: &[u8], target: usize) -> Vec<u8> {
    let mut out = vec![0u8; target];
    let len = payload.len().min(target);
    out[..len].copy_from_slice(&payload[..len]);
    out
}

fn tile_repeat(payload: &[u8], target: usize) -> Vec<u8> {
    if payload.is_empty() {
        return vec![0; target];
    }
    payload.iter().copied().cycle().take(target).collect()
}
