//! Lossless single-channel PNG encoding of pixel grids.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::raster::{ImageGeometry, PixelGrid};

/// An encoded 8-bit grayscale PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    geometry: ImageGeometry,
    png: Vec<u8>,
}

impl RasterImage {
    pub fn geometry(&self) -> ImageGeometry {
        self.geometry
    }

    /// The PNG container bytes.
    pub fn as_png(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }

    /// SHA-256 of the PNG bytes, lowercase hex.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.png))
    }
}

/// Encode `grid` as an L8 PNG.
///
/// Compression settings are fixed so identical grids always produce identical
/// bytes.
pub fn encode(grid: &PixelGrid) -> Result<RasterImage> {
    let mut png = Vec::with_capacity(grid.len() / 2 + 64);
    let encoder =
        PngEncoder::new_with_quality(&mut png, CompressionType::Default, FilterType::Adaptive);
    encoder.write_image(
        grid.as_bytes(),
        grid.width(),
        grid.height(),
        ExtendedColorType::L8,
    )?;
    Ok(RasterImage {
        geometry: grid.geometry(),
        png,
    })
}
