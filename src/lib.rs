//! Deterministic conversion of binary artifacts into grayscale raster images.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`extract`] pulls the payload bytes out of an artifact: raw bytes, a PE
//!    image without its header region, or the hex bytes of a disassembly
//!    listing without its address column.
//! 2. [`raster`] fits the payload to an exact pixel count (pad, truncate,
//!    tile, or auto-sized square) and reshapes it row-major.
//! 3. [`encode`] writes the grid as a lossless 8-bit grayscale PNG.
//!
//! [`pipeline`] chains the stages for one in-memory artifact and [`batch`]
//! runs them over files in parallel.

pub mod batch;
pub mod config;
pub mod encode;
pub mod error;
pub mod extract;
pub mod formats;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod raster;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use config::ConversionConfig;
pub use encode::{encode, RasterImage};
pub use error::{RasterError, Result};
pub use extract::{extract, extract_detailed, ExtractionStrategy, ListingPolicy, PayloadBytes};
pub use pipeline::{convert_bytes, render};
pub use raster::{to_grid, ImageGeometry, PixelGrid, Reconciliation};

/// The `binraster` Python extension module.
#[cfg(feature = "python-ext")]
#[pyo3::pymodule]
fn binraster(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    python_bindings::register_python_bindings(m)
}
