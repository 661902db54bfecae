//! Resampling of auto-sized grids to a fixed display geometry.

use image::imageops::{self, FilterType};
use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::raster::{ImageGeometry, PixelGrid};

/// Resampling filter, mirroring `image::imageops::FilterType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    /// Bicubic
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Resamples `grid` to exactly `geometry`.
pub fn resize_grid(
    grid: &PixelGrid,
    geometry: ImageGeometry,
    filter: ResizeFilter,
) -> Result<PixelGrid> {
    if grid.geometry() == geometry {
        return Ok(grid.clone());
    }
    let source = GrayImage::from_raw(grid.width(), grid.height(), grid.as_bytes().to_vec())
        .ok_or_else(|| {
            RasterError::InvalidGeometry(format!("grid does not fill {}", grid.geometry()))
        })?;
    let resized = imageops::resize(&source, geometry.width(), geometry.height(), filter.into());
    PixelGrid::from_raw(geometry, resized.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{to_grid, Reconciliation};

    #[test]
    fn upscales_to_display_geometry() {
        let grid = to_grid(
            &[255; 10],
            ImageGeometry::square(1).unwrap(),
            Reconciliation::SquareAutoSize,
        );
        let target = ImageGeometry::square(32).unwrap();
        let resized = resize_grid(&grid, target, ResizeFilter::Nearest).unwrap();
        assert_eq!(resized.geometry(), target);
        assert_eq!(resized.len(), 1024);
        // Top-left quadrant comes from the first (white) source pixel.
        assert_eq!(resized.get(0, 0), Some(255));
        assert_eq!(resized.get(31, 31), Some(0));
    }

    #[test]
    fn same_geometry_is_copy() {
        let geometry = ImageGeometry::square(2).unwrap();
        let grid = to_grid(b"abcd", geometry, Reconciliation::PadTruncate);
        let out = resize_grid(&grid, grid.geometry(), ResizeFilter::Lanczos3).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn resize_is_deterministic() {
        let payload: Vec<u8> = (0..200u8).collect();
        let grid = to_grid(&payload, ImageGeometry::default(), Reconciliation::SquareAutoSize);
        let target = ImageGeometry::square(64).unwrap();
        let a = resize_grid(&grid, target, ResizeFilter::CatmullRom).unwrap();
        let b = resize_grid(&grid, target, ResizeFilter::CatmullRom).unwrap();
        assert_eq!(a, b);
    }
}
