//! Python bindings for binraster.
//!
//! Exposes in-memory and on-disk conversion to the Python side, which feeds
//! the produced PNGs to its classifier.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::config::ConversionConfig;
use crate::extract::{ExtractionStrategy, ListingPolicy};
use crate::raster::Reconciliation;

/// Register all Python bindings with the module.
pub fn register_python_bindings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bytes_to_png_py, m)?)?;
    m.add_function(wrap_pyfunction!(file_to_png_py, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging_py, m)?)?;
    Ok(())
}

fn parse_strategy(name: &str) -> PyResult<ExtractionStrategy> {
    match name {
        "raw" => Ok(ExtractionStrategy::Raw),
        "pe" => Ok(ExtractionStrategy::PeHeaderStrip),
        "listing" | "listing_strict" => Ok(ExtractionStrategy::AddressColumnStrip(
            ListingPolicy::StrictWidth,
        )),
        "listing_prefix" => Ok(ExtractionStrategy::AddressColumnStrip(
            ListingPolicy::PrefixPattern,
        )),
        other => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "unknown strategy: {other}"
        ))),
    }
}

fn parse_reconciliation(name: &str) -> PyResult<Reconciliation> {
    match name {
        "pad" => Ok(Reconciliation::PadTruncate),
        "square" => Ok(Reconciliation::SquareAutoSize),
        "tile" => Ok(Reconciliation::TileRepeat),
        other => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "unknown reconciliation: {other}"
        ))),
    }
}

fn build_config(
    strategy: &str,
    reconciliation: &str,
    side: u32,
    normalize: bool,
    display_side: Option<u32>,
) -> PyResult<ConversionConfig> {
    let config = ConversionConfig {
        strategy: parse_strategy(strategy)?,
        reconciliation: parse_reconciliation(reconciliation)?,
        side,
        normalize,
        display_side,
        ..ConversionConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Convert an in-memory artifact to PNG bytes.
#[pyfunction]
#[pyo3(name = "bytes_to_png")]
#[pyo3(signature = (data, strategy="raw", reconciliation="pad", side=256, normalize=false, display_side=None))]
fn bytes_to_png_py<'py>(
    py: Python<'py>,
    data: &[u8],
    strategy: &str,
    reconciliation: &str,
    side: u32,
    normalize: bool,
    display_side: Option<u32>,
) -> PyResult<Bound<'py, PyBytes>> {
    let config = build_config(strategy, reconciliation, side, normalize, display_side)?;
    let conversion = crate::pipeline::convert_bytes(data, &config)?;
    Ok(PyBytes::new(py, conversion.image.as_png()))
}

/// Convert a file and write `<output>`; returns the PNG's SHA-256.
#[pyfunction]
#[pyo3(name = "file_to_png")]
#[pyo3(signature = (input, output, strategy="raw", reconciliation="pad", side=256, normalize=false, display_side=None))]
fn file_to_png_py(
    input: String,
    output: String,
    strategy: &str,
    reconciliation: &str,
    side: u32,
    normalize: bool,
    display_side: Option<u32>,
) -> PyResult<String> {
    let config = build_config(strategy, reconciliation, side, normalize, display_side)?;
    let job = crate::batch::ConversionJob::new(input, output);
    let report = crate::batch::convert_file(&job, &config)?;
    Ok(report.sha256)
}

/// Initialize logging from Python
#[pyfunction]
#[pyo3(name = "init_logging")]
#[pyo3(signature = (json=false))]
fn init_logging_py(json: bool) {
    if json {
        crate::logging::init_tracing_json();
    } else {
        crate::logging::init_tracing();
    }
}
